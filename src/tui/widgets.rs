use ratatui::prelude::*;
use ratatui::widgets::{Block, Paragraph, Widget};

use crate::color::Color as AppColor;
use crate::contrast;
use crate::extract::Swatch;

/// Swatches per grid row.
pub(crate) const ROW_WIDTH: usize = 8;

/// A widget that renders an extracted palette as rows of colored swatches,
/// each labeled with its hex value, plus a contrast readout for the selected
/// swatch.
pub struct PaletteWidget<'a> {
    swatches: &'a [Swatch],
    selected: usize,
    title: &'a str,
}

impl<'a> PaletteWidget<'a> {
    pub fn new(swatches: &'a [Swatch], selected: usize, title: &'a str) -> Self {
        Self {
            swatches,
            selected,
            title,
        }
    }
}

fn to_color(c: AppColor) -> Color {
    Color::Rgb(c.r, c.g, c.b)
}

/// Build one row of swatches. Each swatch is 9 chars wide with its hex value
/// centered on the colored background, written in the auto-picked text color.
/// The selected swatch gets bold + underline.
fn build_swatch_row(swatches: &[Swatch], start: usize, selected: usize) -> Line<'static> {
    let mut spans = vec![Span::raw("  ")];
    for (offset, swatch) in swatches[start..].iter().take(ROW_WIDTH).enumerate() {
        let i = start + offset;
        let bg = to_color(swatch.color);
        let fg = to_color(contrast::readable_text_color(swatch.color));

        let label = format!("{:^9}", swatch.color.to_hex());
        let mut style = Style::default().bg(bg).fg(fg);
        if i == selected {
            style = style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
        }
        spans.push(Span::styled(label, style));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

/// Build the row of swatch numbers below a swatch row. Numbers are 1-based,
/// matching the extract table.
fn build_index_row(len: usize, start: usize, selected: usize) -> Line<'static> {
    let mut spans = vec![Span::raw("  ")];
    for i in start..(start + ROW_WIDTH).min(len) {
        let style = if i == selected {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(format!("{:^9}", i + 1), style));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

/// The contrast readout for one swatch: pixel share, auto-picked text color,
/// contrast ratio, and the four WCAG conformance verdicts.
fn build_readout(swatch: &Swatch) -> Vec<Line<'static>> {
    let background = swatch.color;
    let text = contrast::readable_text_color(background);
    let evaluation = contrast::evaluate(background, text);

    let header = Line::from(vec![
        Span::raw("  "),
        Span::styled(
            format!("  {}  ", background.to_hex()),
            Style::default().bg(to_color(background)).fg(to_color(text)),
        ),
        Span::raw(format!(
            "  {:.1}% of pixels   {} text   contrast {}",
            swatch.weight * 100.0,
            text.to_hex(),
            contrast::display_ratio(evaluation.ratio),
        )),
    ]);

    let conformance = evaluation.conformance;
    let mut verdicts = vec![Span::raw("  ")];
    for (name, pass) in [
        ("small AA", conformance.small_aa),
        ("small AAA", conformance.small_aaa),
        ("large AA", conformance.large_aa),
        ("large AAA", conformance.large_aaa),
    ] {
        verdicts.push(Span::raw(format!("{name} ")));
        verdicts.push(conformance_mark(pass));
        verdicts.push(Span::raw("   "));
    }

    vec![header, Line::from(""), Line::from(verdicts)]
}

/// Green check for pass, red cross for fail.
fn conformance_mark(pass: bool) -> Span<'static> {
    if pass {
        Span::styled(
            "✓",
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(
            "✗",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )
    }
}

impl Widget for PaletteWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered().title(format!("Palette: {}", self.title));
        let inner = block.inner(area);
        block.render(area, buf);

        let mut lines = vec![Line::from("")];
        let mut start = 0;
        while start < self.swatches.len() {
            lines.push(build_swatch_row(self.swatches, start, self.selected));
            lines.push(build_index_row(self.swatches.len(), start, self.selected));
            lines.push(Line::from(""));
            start += ROW_WIDTH;
        }

        if let Some(swatch) = self.swatches.get(self.selected) {
            lines.extend(build_readout(swatch));
            lines.push(Line::from(""));
        }

        lines.push(Line::from(Span::styled(
            "  q quit   arrows/hjkl move",
            Style::default().fg(Color::DarkGray),
        )));

        Paragraph::new(lines).render(inner, buf);
    }
}
