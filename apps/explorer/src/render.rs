use std::io::{self, Write};

use crossterm::style::{Attribute, Color, Stylize};
use kaprekar_core::{Exploration, Survey, KAPREKAR_CONSTANT};

const RULE_WIDTH: usize = 60;
const STEP_WIDTH: usize = 6;
const NUMBER_WIDTH: usize = 8;
const PROCESS_WIDTH: usize = 40;
const CONSTANT_MARKER: &str = " 🎉 KAPREKAR'S CONSTANT!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Title,
    Success,
    Warning,
    Error,
    Prompt,
    Label,
    Step,
    Number,
    Process,
    Header,
}

impl Tone {
    fn color(self) -> Color {
        match self {
            Tone::Title => Color::Blue,
            Tone::Success | Tone::Number => Color::Green,
            Tone::Warning | Tone::Process => Color::Yellow,
            Tone::Error => Color::Red,
            Tone::Prompt | Tone::Step => Color::Cyan,
            Tone::Label => Color::Reset,
            Tone::Header => Color::Magenta,
        }
    }

    fn bold(self) -> bool {
        !matches!(self, Tone::Step | Tone::Number | Tone::Process)
    }
}

/// Console presentation of explorations. With `color` off every method
/// writes plain text.
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    pub color: bool,
}

impl Renderer {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    pub fn paint(&self, text: &str, tone: Tone) -> String {
        if !self.color {
            return text.to_string();
        }
        let styled = text.with(tone.color());
        if tone.bold() {
            styled.attribute(Attribute::Bold).to_string()
        } else {
            styled.to_string()
        }
    }

    pub fn welcome(&self, out: &mut impl Write) -> io::Result<()> {
        self.panel(
            out,
            "Kaprekar's Constant Explorer",
            &[
                ("Welcome to Kaprekar's Constant Explorer!", Some(Tone::Title)),
                ("", None),
                (
                    "This program explores the fascinating mathematical phenomenon where",
                    None,
                ),
                (
                    "any 4-digit number with different digits eventually reaches 6174",
                    None,
                ),
                ("through a simple process of sorting and subtracting.", None),
                ("", None),
                (
                    "Enter a 4-digit number with all different digits",
                    Some(Tone::Warning),
                ),
            ],
        )
    }

    pub fn prompt(&self, out: &mut impl Write, text: &str) -> io::Result<()> {
        write!(out, "\n{}: ", self.paint(text, Tone::Prompt))?;
        out.flush()
    }

    pub fn error(&self, out: &mut impl Write, message: &str) -> io::Result<()> {
        writeln!(out, "{} {message}", self.paint("Error:", Tone::Error))
    }

    pub fn exploration(&self, out: &mut impl Write, exploration: &Exploration) -> io::Result<()> {
        writeln!(out, "\n{}", "=".repeat(RULE_WIDTH))?;
        self.result_panel(out, exploration)?;
        self.sequence_table(out, exploration)?;
        self.summary(out, exploration)
    }

    fn result_panel(&self, out: &mut impl Write, exploration: &Exploration) -> io::Result<()> {
        let steps = exploration.steps();
        let (headline, tone, detail) = if exploration.reached_constant() {
            (
                "SUCCESS!",
                Tone::Success,
                format!("Reached Kaprekar's constant ({KAPREKAR_CONSTANT}) in {steps} steps"),
            )
        } else {
            (
                "LIMIT REACHED",
                Tone::Warning,
                format!("Did not reach {KAPREKAR_CONSTANT} within {steps} steps"),
            )
        };
        self.panel(
            out,
            "Kaprekar's Constant Explorer Results",
            &[(headline, Some(tone)), (detail.as_str(), None)],
        )
    }

    fn sequence_table(&self, out: &mut impl Write, exploration: &Exploration) -> io::Result<()> {
        writeln!(out, "\n{}", self.paint("Step-by-Step Sequence", Tone::Label))?;
        let header = format!(
            "{:<STEP_WIDTH$} {:<NUMBER_WIDTH$} {:<PROCESS_WIDTH$}",
            "Step", "Number", "Process"
        );
        writeln!(out, "{}", self.paint(header.trim_end(), Tone::Header))?;
        writeln!(
            out,
            "{} {} {}",
            "-".repeat(STEP_WIDTH),
            "-".repeat(NUMBER_WIDTH),
            "-".repeat(PROCESS_WIDTH)
        )?;

        let start = exploration.sequence.first().copied().unwrap_or(exploration.start);
        self.table_row(out, "Start", start, "Initial number")?;

        let last = exploration.steps();
        for (index, record) in exploration.records().enumerate() {
            let step = index + 1;
            let mut process = record.to_string();
            if step == last && exploration.reached_constant() {
                process.push_str(CONSTANT_MARKER);
            }
            self.table_row(out, &step.to_string(), record.result, &process)?;
        }
        Ok(())
    }

    fn table_row(
        &self,
        out: &mut impl Write,
        step: &str,
        number: u16,
        process: &str,
    ) -> io::Result<()> {
        let step = format!("{step:<STEP_WIDTH$}");
        let number = format!("{number:<NUMBER_WIDTH$}");
        writeln!(
            out,
            "{} {} {}",
            self.paint(&step, Tone::Step),
            self.paint(&number, Tone::Number),
            self.paint(process, Tone::Process)
        )
    }

    fn summary(&self, out: &mut impl Write, exploration: &Exploration) -> io::Result<()> {
        let reached = if exploration.reached_constant() {
            "Yes"
        } else {
            "No"
        };
        writeln!(out)?;
        self.summary_line(out, "Starting number:", &exploration.start.to_string())?;
        self.summary_line(out, "Total steps:", &exploration.steps().to_string())?;
        self.summary_line(out, "Final number:", &exploration.final_number().to_string())?;
        self.summary_line(out, "Reached 6174:", reached)
    }

    fn summary_line(&self, out: &mut impl Write, label: &str, value: &str) -> io::Result<()> {
        writeln!(out, "{} {value}", self.paint(label, Tone::Label))
    }

    pub fn survey(&self, out: &mut impl Write, survey: &Survey) -> io::Result<()> {
        writeln!(
            out,
            "{}",
            self.paint(
                &format!("Surveyed {} starting numbers", survey.total()),
                Tone::Title
            )
        )?;
        let header = format!("{:<STEP_WIDTH$} {:<NUMBER_WIDTH$}", "Steps", "Count");
        writeln!(out, "{}", self.paint(header.trim_end(), Tone::Header))?;
        for (steps, count) in &survey.histogram {
            let steps = format!("{steps:<STEP_WIDTH$}");
            writeln!(
                out,
                "{} {}",
                self.paint(&steps, Tone::Step),
                self.paint(&count.to_string(), Tone::Number)
            )?;
        }
        if let Some(max) = survey.max_steps() {
            writeln!(out, "{} {max}", self.paint("Most steps needed:", Tone::Label))?;
        }
        if !survey.unconverged.is_empty() {
            writeln!(
                out,
                "{} {}",
                self.paint("Did not reach 6174:", Tone::Warning),
                survey.unconverged.len()
            )?;
        }
        Ok(())
    }

    fn panel(
        &self,
        out: &mut impl Write,
        title: &str,
        lines: &[(&str, Option<Tone>)],
    ) -> io::Result<()> {
        let inner = lines
            .iter()
            .map(|(text, _)| text.chars().count())
            .chain(std::iter::once(title.chars().count() + 2))
            .max()
            .unwrap_or(0);

        let title_rule = "─".repeat(inner - title.chars().count() - 1);
        writeln!(
            out,
            "╭─ {} {}╮",
            self.paint(title, Tone::Title),
            title_rule
        )?;
        for (text, tone) in lines {
            let pad = " ".repeat(inner - text.chars().count());
            let text = match tone {
                Some(tone) => self.paint(text, *tone),
                None => text.to_string(),
            };
            writeln!(out, "│ {text}{pad} │")?;
        }
        writeln!(out, "╰{}╯", "─".repeat(inner + 2))
    }
}

#[cfg(test)]
#[path = "tests/render_tests.rs"]
mod tests;
