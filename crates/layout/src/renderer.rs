//! Paginated story renderer
//!
//! Layout is a fold: a `Flow` holding the finished pages, the open page and
//! the current baseline is threaded by value through every placed line.

use crate::config::{LayoutConfig, TextAlign, TextStyle};
use crate::metrics::{FontMetrics, StandardMetrics};
use crate::model::{Document, Page, RunKind, TextRun};
use crate::paragraph::{split_paragraphs, wrap_words};
use crate::Result;
use log::{debug, warn};
use pdf_core::calculate_x_offset;
use serde::{Deserialize, Serialize};

/// One labelled metadata line
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MetadataField {
    pub label: String,
    #[serde(default)]
    pub value: Option<String>,
}

impl MetadataField {
    pub fn new(label: &str, value: Option<String>) -> Self {
        Self {
            label: label.to_string(),
            value,
        }
    }

    /// Rendered line, or `None` when the value is missing or blank
    pub fn line(&self) -> Option<String> {
        let value = self.value.as_deref()?.trim();
        if value.is_empty() {
            return None;
        }
        if self.label.trim().is_empty() {
            return Some(value.to_string());
        }
        Some(format!("{}: {}", self.label.trim(), value))
    }
}

/// Everything that goes on the pages
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RenderInput {
    pub title: String,
    pub metadata: Vec<MetadataField>,
    /// Story text; blank lines separate paragraphs
    pub body: String,
    /// Lines anchored near the bottom of the last page
    pub footer: Vec<String>,
}

/// Layout state threaded through the fold
struct Flow {
    finished: Vec<Page>,
    page: Page,
    /// Baseline of the next line
    y: f64,
}

impl Flow {
    fn new(config: &LayoutConfig) -> Self {
        Self {
            finished: Vec::new(),
            page: Page::new(config.page_size.width, config.page_size.height),
            y: config.top(),
        }
    }

    /// Start a new page if a line of `line_height` would sit too low
    ///
    /// An empty page is never left behind, so a line taller than the page
    /// still gets placed instead of looping.
    fn ensure_room(mut self, line_height: f64, config: &LayoutConfig) -> Self {
        if self.y < config.page_floor(line_height) && !self.page.is_empty() {
            debug!(
                "Page {} full at y={:.2}, continuing on a new page",
                self.finished.len() + 1,
                self.y
            );
            let next = Page::new(config.page_size.width, config.page_size.height);
            self.finished.push(std::mem::replace(&mut self.page, next));
            self.y = config.top();
        }
        self
    }

    fn place(mut self, run: TextRun) -> Self {
        self.page.text_runs.push(run);
        self
    }

    fn advance(mut self, distance: f64) -> Self {
        self.y -= distance;
        self
    }

    fn finish(mut self) -> Document {
        self.finished.push(self.page);
        Document {
            pages: self.finished,
        }
    }
}

/// Lays out a story into fixed-size pages
///
/// # Example
/// ```
/// use story_layout::{LayoutConfig, PaginatedTextRenderer, RenderInput, StandardMetrics};
///
/// let renderer = PaginatedTextRenderer::new(LayoutConfig::default(), &StandardMetrics).unwrap();
/// let document = renderer
///     .render(&RenderInput {
///         title: "Le dragon".to_string(),
///         body: "Il était une fois un dragon.".to_string(),
///         ..Default::default()
///     })
///     .unwrap();
/// assert_eq!(document.page_count(), 1);
/// ```
pub struct PaginatedTextRenderer<'a> {
    config: LayoutConfig,
    metrics: &'a dyn FontMetrics,
}

impl<'a> PaginatedTextRenderer<'a> {
    /// Create a renderer, validating the page geometry
    pub fn new(config: LayoutConfig, metrics: &'a dyn FontMetrics) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, metrics })
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Lay out a story
    pub fn render(&self, input: &RenderInput) -> Result<Document> {
        let config = &self.config;

        // Fail on an unmeasurable style even if its section is empty
        for style in [&config.title, &config.metadata, &config.body, &config.footer] {
            self.measure(style, "")?;
        }

        let flow = Flow::new(config);

        let title_lines = self.wrap(&config.title, &input.title)?;
        let has_title = !title_lines.is_empty();
        let flow = title_lines.into_iter().try_fold(flow, |flow, line| {
            self.place_line(
                flow,
                line,
                &config.title,
                RunKind::Title,
                config.title_align,
                config.title_line_height(),
            )
        })?;
        let flow = if has_title {
            flow.advance(config.title_gap)
        } else {
            flow
        };

        let mut has_metadata = false;
        let flow = input.metadata.iter().try_fold(flow, |flow, field| {
            let Some(line) = field.line() else {
                debug!("Skipping metadata field '{}' without value", field.label);
                return Ok(flow);
            };
            has_metadata = true;
            self.place_wrapped(flow, &line, &config.metadata, RunKind::Metadata)
        })?;
        let flow = if has_metadata {
            flow.advance(config.section_gap)
        } else {
            flow
        };

        let flow = self.place_body(flow, &input.body)?;
        let flow = self.place_footer(flow, &input.footer)?;

        let document = flow.finish();
        debug!(
            "Laid out {} pages ({} body lines)",
            document.page_count(),
            document.runs_of(RunKind::Body).count()
        );
        Ok(document)
    }

    fn measure(&self, style: &TextStyle, text: &str) -> Result<f64> {
        self.metrics.text_width(&style.font, style.size, text)
    }

    fn wrap(&self, style: &TextStyle, text: &str) -> Result<Vec<String>> {
        wrap_words(text, self.config.usable_width(), |candidate| {
            self.measure(style, candidate)
        })
    }

    fn place_body(&self, flow: Flow, body: &str) -> Result<Flow> {
        let config = &self.config;
        let line_height = config.line_height(&config.body);

        if body.trim().is_empty() {
            debug!("Empty story body, placing placeholder");
            return self.place_wrapped(
                flow,
                &config.placeholder,
                &config.body,
                RunKind::Placeholder,
            );
        }

        split_paragraphs(body)
            .into_iter()
            .try_fold(flow, |flow, paragraph| {
                if paragraph.trim().is_empty() {
                    return Ok(flow.advance(line_height));
                }
                let flow = self.place_wrapped(flow, &paragraph, &config.body, RunKind::Body)?;
                Ok(flow.advance(line_height / 2.0))
            })
    }

    /// Wrap text and place each line, left-aligned, one line height apart
    fn place_wrapped(
        &self,
        flow: Flow,
        text: &str,
        style: &TextStyle,
        kind: RunKind,
    ) -> Result<Flow> {
        let line_height = self.config.line_height(style);
        self.wrap(style, text)?
            .into_iter()
            .try_fold(flow, |flow, line| {
                self.place_line(flow, line, style, kind, TextAlign::Left, line_height)
            })
    }

    fn place_line(
        &self,
        flow: Flow,
        text: String,
        style: &TextStyle,
        kind: RunKind,
        align: TextAlign,
        line_height: f64,
    ) -> Result<Flow> {
        let x = self.line_x(style, &text, align)?;
        let flow = flow.ensure_room(line_height, &self.config);
        let run = TextRun {
            text,
            x,
            y: flow.y,
            font: style.font.clone(),
            size: style.size,
            color: style.color,
            kind,
        };
        Ok(flow.place(run).advance(line_height))
    }

    fn line_x(&self, style: &TextStyle, text: &str, align: TextAlign) -> Result<f64> {
        let offset = match align {
            TextAlign::Left => 0.0,
            _ => calculate_x_offset(
                self.measure(style, text)?,
                self.config.usable_width(),
                align.into(),
            ),
        };
        // An over-long line starts at the margin whatever the alignment
        Ok(self.config.margin + offset.max(0.0))
    }

    /// First line of `text` that fits the usable width
    ///
    /// Words past the first wrapped line are dropped. A single word wider
    /// than the line loses trailing characters until it fits.
    fn fit_line(&self, style: &TextStyle, text: &str) -> Result<String> {
        let max_width = self.config.usable_width();
        let mut lines = self.wrap(style, text)?.into_iter();
        let mut line = lines.next().unwrap_or_default();
        if lines.next().is_some() {
            debug!("Footer line '{}' cut to '{}'", text, line);
        }
        while !line.is_empty() && self.measure(style, &line)? > max_width {
            line.pop();
        }
        Ok(line)
    }

    /// Anchor footer lines on the open (last) page
    fn place_footer(&self, mut flow: Flow, footer: &[String]) -> Result<Flow> {
        let config = &self.config;

        for (index, line) in footer.iter().enumerate() {
            let text = line.trim();
            if text.is_empty() {
                continue;
            }

            let y = config.footer_top - index as f64 * config.footer_spacing;
            if y < 0.0 {
                warn!("Footer line {} falls below the page at y={y:.2}, dropped", index + 1);
                continue;
            }

            let text = self.fit_line(&config.footer, text)?;
            if text.is_empty() {
                warn!("Footer line {} does not fit the page width, dropped", index + 1);
                continue;
            }
            let run = TextRun {
                x: self.line_x(&config.footer, &text, config.footer_align)?,
                text,
                y,
                font: config.footer.font.clone(),
                size: config.footer.size,
                color: config.footer.color,
                kind: RunKind::Footer,
            };
            flow = flow.place(run);
        }

        Ok(flow)
    }
}

/// Lay out a story with the standard font metrics
pub fn render_story_document(input: &RenderInput, config: &LayoutConfig) -> Result<Document> {
    PaginatedTextRenderer::new(config.clone(), &StandardMetrics)?.render(input)
}
