use kaprekar_core::{explore, survey, Candidate, Outcome};

use super::*;

fn render(exploration: &Exploration) -> String {
    let mut out = Vec::new();
    Renderer::new(false)
        .exploration(&mut out, exploration)
        .expect("render");
    String::from_utf8(out).expect("utf8")
}

fn explored(value: u16, max_steps: usize) -> Exploration {
    explore(Candidate::try_from(value).expect("candidate"), max_steps)
}

#[test]
fn converged_report_marks_final_row() {
    let text = render(&explored(1234, 50));

    assert!(text.contains("SUCCESS!"));
    assert!(text.contains("Reached Kaprekar's constant (6174) in 3 steps"));
    assert!(text.contains("Start  1234     Initial number"));
    assert!(text.contains("1      3087     4321 - 1234 = 3087\n"));
    assert!(text.contains("2      8352     8730 - 378 = 8352\n"));
    assert!(text.contains("3      6174     8532 - 2358 = 6174 🎉 KAPREKAR'S CONSTANT!"));
    assert!(text.contains("Starting number: 1234"));
    assert!(text.contains("Total steps: 3"));
    assert!(text.contains("Final number: 6174"));
    assert!(text.contains("Reached 6174: Yes"));
}

#[test]
fn limited_report_has_no_marker() {
    let exploration = explored(1234, 2);
    assert_eq!(exploration.outcome, Outcome::StepLimitReached);
    let text = render(&exploration);

    assert!(text.contains("LIMIT REACHED"));
    assert!(text.contains("Did not reach 6174 within 2 steps"));
    assert!(!text.contains("KAPREKAR'S CONSTANT!"));
    assert!(text.contains("Reached 6174: No"));
}

#[test]
fn constant_start_renders_only_start_row() {
    let text = render(&explored(6174, 50));
    assert!(text.contains("Start  6174     Initial number"));
    assert!(!text.contains("KAPREKAR'S CONSTANT!"));
    assert!(text.contains("Total steps: 0"));
}

#[test]
fn panel_rows_share_one_width() {
    let mut out = Vec::new();
    Renderer::new(false).welcome(&mut out).expect("render");
    let text = String::from_utf8(out).expect("utf8");
    let widths: Vec<usize> = text.lines().map(|line| line.chars().count()).collect();
    assert!(widths.windows(2).all(|pair| pair[0] == pair[1]), "{widths:?}");
}

#[test]
fn plain_renderer_emits_no_escape_codes() {
    assert!(!render(&explored(3524, 50)).contains('\u{1b}'));
}

#[test]
fn colored_renderer_styles_text() {
    let painted = Renderer::new(true).paint("Error:", Tone::Error);
    assert!(painted.contains('\u{1b}'));
    assert!(painted.contains("Error:"));
}

#[test]
fn survey_lists_histogram() {
    let mut out = Vec::new();
    Renderer::new(false)
        .survey(&mut out, &survey(50))
        .expect("render");
    let text = String::from_utf8(out).expect("utf8");
    assert!(text.contains("Surveyed 4536 starting numbers"));
    assert!(text.contains("Most steps needed: 7"));
    assert!(!text.contains("Did not reach"));
}
