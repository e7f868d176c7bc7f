//! Formatting tracing events for the console.
//!
//! Events are printed as a colored level marker, the message, and any fields on one line,
//! followed by the enclosing spans, innermost first.

use std::fmt;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stderr;
use owo_colors::Style;
use tap::Tap;
use tracing::field::Field;
use tracing::field::Visit;
use tracing::Level;
use tracing::Subscriber;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::FmtContext;
use tracing_subscriber::fmt::FormatEvent;
use tracing_subscriber::fmt::FormatFields;
use tracing_subscriber::fmt::FormattedFields;
use tracing_subscriber::registry::LookupSpan;

#[derive(Debug, Default)]
pub struct EventFormatter;

impl<S, N> FormatEvent<S, N> for EventFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &tracing::Event<'_>,
    ) -> fmt::Result {
        let mut visitor =
            EventVisitor::new(*event.metadata().level()).tap_mut(|visitor| event.record(visitor));

        if let Some(scope) = ctx.event_scope() {
            for span in scope.from_root() {
                let fields = span
                    .extensions()
                    .get::<FormattedFields<N>>()
                    .map(|fields| fields.fields.clone())
                    .unwrap_or_default();
                visitor.spans.push(SpanInfo {
                    name: span.name(),
                    fields,
                });
            }
        }

        write!(writer, "{visitor}")
    }
}

#[derive(Debug)]
struct EventVisitor {
    style: EventStyle,
    message: String,
    fields: Vec<(String, String)>,
    /// Spans, in root-to-current (outside-in) order.
    spans: Vec<SpanInfo>,
}

impl EventVisitor {
    fn new(level: Level) -> Self {
        Self {
            style: EventStyle::new(level),
            message: String::new(),
            fields: Vec::new(),
            spans: Vec::new(),
        }
    }
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        let value = format!("{value:?}");
        if field.name() == "message" {
            self.message = value;
        } else {
            self.fields.push((field.name().to_owned(), value));
        }
    }
}

impl fmt::Display for EventVisitor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            self.style.marker(),
            self.message
                .if_supports_color(Stderr, |text| self.style.text.style(text))
        )?;

        for (name, value) in &self.fields {
            write!(f, " {}", self.style.field(name, value))?;
        }
        writeln!(f)?;

        for span in self.spans.iter().rev() {
            writeln!(f, "  {}", self.style.span(span))?;
        }

        Ok(())
    }
}

#[derive(Debug)]
struct EventStyle {
    marker: &'static str,
    marker_style: Style,
    text: Style,
    field_name: Style,
    field_value: Style,
}

impl EventStyle {
    fn new(level: Level) -> Self {
        let mut text = Style::new();
        let mut field_name = Style::new().bold();
        let mut field_value = Style::new();

        let (marker, marker_style) = match level {
            Level::TRACE => ("TRACE ", Style::new().purple()),
            Level::DEBUG => ("DEBUG ", Style::new().blue()),
            Level::INFO => ("• ", Style::new().green()),
            Level::WARN => ("⚠ ", Style::new().yellow()),
            Level::ERROR => ("⚠ ", Style::new().red()),
        };

        match level {
            Level::TRACE | Level::DEBUG => {
                text = text.dimmed();
                field_name = field_name.dimmed();
                field_value = field_value.dimmed();
            }
            Level::WARN => text = text.yellow(),
            Level::ERROR => text = text.red(),
            Level::INFO => {}
        }

        Self {
            marker,
            marker_style,
            text,
            field_name,
            field_value,
        }
    }

    fn marker(&self) -> String {
        self.marker
            .if_supports_color(Stderr, |text| self.marker_style.style(text))
            .to_string()
    }

    fn field(&self, name: &str, value: &str) -> String {
        format!(
            "{}{}",
            name.if_supports_color(Stderr, |text| self.field_name.style(text)),
            format!("={value}").if_supports_color(Stderr, |text| self.field_value.style(text)),
        )
    }

    fn span(&self, span: &SpanInfo) -> String {
        let fields = if span.fields.is_empty() {
            String::new()
        } else {
            format!("{{{}}}", span.fields)
        };
        format!(
            "{}{}{fields}",
            "in ".if_supports_color(Stderr, |text| Style::new().dimmed().style(text)),
            span.name,
        )
    }
}

#[derive(Debug)]
struct SpanInfo {
    name: &'static str,
    /// The span's fields, formatted by the layer's field formatter.
    fields: String,
}
