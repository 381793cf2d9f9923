//! # Transferbeam CLI Application
//!
//! Terminal front-end for the transfer beam design engine. Prompts for the
//! engine's input parameters, classifies the beam, runs the governing design
//! path, and prints a formatted report followed by the result JSON.
//!
//! All computation lives in `transfer_core`; this binary only gathers input
//! and renders output.

use std::io::{self, BufRead, Write};

use transfer_core::calculations::load_analysis::{self, LoadAnalysisInput};
use transfer_core::calculations::section_design::{self, SectionDesignInput};
use transfer_core::calculations::strut_and_tie::{self, StrutTieInput};
use transfer_core::criteria::DesignCriteria;
use transfer_core::geometry::BeamGeometry;
use transfer_core::materials::{BarSize, Concrete, ReinforcingSteel};

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    input.trim().parse().unwrap_or(default)
}

fn prompt_u32(prompt: &str, default: u32) -> u32 {
    prompt_f64(prompt, f64::from(default)) as u32
}

fn main() {
    println!("Transferbeam CLI - Deep Transfer Beam Designer");
    println!("==============================================");
    println!();

    let dead_load = prompt_f64("Dead load transfer force (kip) [50.0]: ", 50.0);
    let live_load = prompt_f64("Live load transfer force (kip) [30.0]: ", 30.0);
    let span = prompt_f64("Beam length (ft) [20.0]: ", 20.0);
    let position = prompt_f64("Transfer column location (ft) [8.0]: ", 8.0);
    let depth = prompt_f64("Beam depth (in) [60.0]: ", 60.0);
    let width = prompt_f64("Beam width (in) [24.0]: ", 24.0);
    let col1 = prompt_f64("Column 1 width (in) [24.0]: ", 24.0);
    let col2 = prompt_f64("Column 2 width (in) [24.0]: ", 24.0);
    let fc = prompt_f64("Concrete strength f'c (psi) [4000]: ", 4000.0);
    let fy = prompt_f64("Reinforcement yield fy (ksi) [60]: ", 60.0);
    let tie_size = prompt_u32("Tension bar size [8]: ", 8);
    let stirrup_size = prompt_u32("Stirrup bar size [5]: ", 5);
    let stirrup_legs = prompt_u32("Stirrup legs [2]: ", 2);
    let skin_size = prompt_u32("Skin bar size [5]: ", 5);

    let geometry = BeamGeometry {
        span_ft: span,
        load_position_ft: position,
        depth_in: depth,
        width_in: width,
        col1_width_in: col1,
        col2_width_in: col2,
    };
    let criteria = DesignCriteria::aci_318_14();

    let analysis_input = LoadAnalysisInput {
        label: "CLI".to_string(),
        geometry,
        dead_load_kip: dead_load,
        live_load_kip: live_load,
    };

    let analysis = match load_analysis::calculate(&analysis_input, &criteria) {
        Ok(result) => result,
        Err(e) => return report_error(&e),
    };

    println!();
    println!("═══════════════════════════════════════");
    println!("  LOAD ANALYSIS");
    println!("═══════════════════════════════════════");
    println!();
    println!("  Self weight: {:.2} kip", analysis.self_weight_kip);
    println!(
        "  Pu = {:.1} kip ({})",
        analysis.pu_kip, analysis.governing_combination
    );
    println!(
        "  R1 = {:.1} kip, R2 = {:.1} kip",
        analysis.r1_kip, analysis.r2_kip
    );
    println!(
        "  Span/depth = {:.2} -> {}",
        analysis.span_to_depth_ratio,
        if analysis.deep_beam {
            "DEEP BEAM (strut-and-tie)"
        } else {
            "SLENDER BEAM (conventional design)"
        }
    );
    println!();

    if analysis.deep_beam {
        let input = StrutTieInput {
            label: "CLI".to_string(),
            geometry,
            concrete: Concrete::new(fc),
            steel: ReinforcingSteel::new(fy),
            dead_load_kip: dead_load,
            live_load_kip: live_load,
            tie_bar: BarSize(tie_size as u8),
            stirrup_bar: BarSize(stirrup_size as u8),
            stirrup_legs,
            skin_bar: BarSize(skin_size as u8),
        };

        match strut_and_tie::calculate(&input, &criteria) {
            Ok(result) => {
                println!("═══════════════════════════════════════");
                println!("  STRUT-AND-TIE DESIGN");
                println!("═══════════════════════════════════════");
                println!();
                println!(
                    "  Struts:  A-C {:.1} kip at {:.1} deg, B-C {:.1} kip at {:.1} deg",
                    result.strut_ac.force_kip,
                    result.strut_ac.angle_deg,
                    result.strut_bc.force_kip,
                    result.strut_bc.angle_deg
                );
                println!("  Tie:     {:.1} kip", result.tie.force_kip);
                println!();
                println!("  phi*Vn     = {:.1} kip", result.phi_vn_kip);
                println!("  phi*Vn,max = {:.1} kip", result.phi_vn_max_kip);
                println!(
                    "  Tie steel:  {} {} bars ({:.2} in2 req, {:.2} in2 provided)",
                    result.tie.bar_count,
                    result.tie.bar,
                    result.tie.required_area_in2,
                    result.tie.provided_area_in2
                );
                println!(
                    "  Web steel:  {} {}-leg stirrups at {:.1} in, {} skin bars at {:.1} in",
                    result.web_reinforcement.stirrup_bar,
                    result.web_reinforcement.stirrup_legs,
                    result.web_reinforcement.stirrup_spacing_in,
                    result.web_reinforcement.skin_bar,
                    result.web_reinforcement.skin_spacing_in
                );
                println!();
                if result.findings.is_empty() {
                    println!("  Compliance: [OK]");
                } else {
                    println!("  Compliance: [FAIL]");
                    for finding in &result.findings {
                        println!("    - {}", finding.message());
                    }
                }

                print_json(&result);
            }
            Err(e) => report_error(&e),
        }
    } else {
        let input = SectionDesignInput {
            label: "CLI".to_string(),
            concrete: Concrete::new(fc),
            steel: ReinforcingSteel::new(fy),
            width_in: width,
            depth_in: depth,
            mu_kipft: analysis.mu_kipft.unwrap_or(0.0),
            vu_kip: analysis.vu_kip,
            tie_bar: BarSize(tie_size as u8),
        };

        match section_design::calculate(&input, &criteria) {
            Ok(result) => {
                println!("═══════════════════════════════════════");
                println!("  CONVENTIONAL SECTION DESIGN");
                println!("═══════════════════════════════════════");
                println!();
                println!(
                    "  Mu = {:.1} kip-ft, Vu = {:.1} kip",
                    input.mu_kipft, input.vu_kip
                );
                println!(
                    "  As = {:.2} in2 (limits {:.2} / {:.2})",
                    result.as_required_in2, result.as_min_in2, result.as_max_in2
                );
                println!(
                    "  Flexural steel: {} {} bars ({:.2} in2 provided)",
                    result.bar_count, result.bar, result.provided_area_in2
                );
                println!(
                    "  Shear: Vc = {:.1} kip, phi*Vc = {:.1} kip",
                    result.vc_kip, result.phi_vc_kip
                );
                match result.stirrup_spacing_in {
                    Some(spacing) => println!("  Stirrups required at {:.1} in", spacing),
                    None => println!("  No stirrups required"),
                }

                print_json(&result);
            }
            Err(e) => report_error(&e),
        }
    }
}

fn print_json<T: serde::Serialize>(result: &T) {
    println!();
    println!("JSON Output (for LLM/API use):");
    if let Ok(json) = serde_json::to_string_pretty(result) {
        println!("{}", json);
    }
}

fn report_error(e: &transfer_core::CalcError) {
    eprintln!("Error: {}", e);
    if let Ok(json) = serde_json::to_string_pretty(e) {
        eprintln!();
        eprintln!("Error JSON:");
        eprintln!("{}", json);
    }
}
