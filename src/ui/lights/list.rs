//! Keyed list renderer for the light collection.

use crate::light::{Endpoint, Light, LightId};
use crate::ui::theme::{HEADER_SEPARATOR, HEADER_TEXT, LIGHT_OFF, LIGHT_ON};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{List, ListItem};
use std::iter::FusedIterator;
use std::slice;

/// Status attributes shown after the light's name, in this order.
const STATUS_ATTRIBUTES: [&str; 3] = ["power", "bright", "model"];

/// Read-only view turning a light collection into one child per light.
#[derive(Debug, Clone, Copy)]
pub struct LightList<'a> {
    endpoint: &'a Endpoint,
    lights: &'a [Light],
}

impl<'a> LightList<'a> {
    pub fn new(endpoint: &'a Endpoint, lights: &'a [Light]) -> Self {
        Self { endpoint, lights }
    }

    pub fn len(&self) -> usize {
        self.lights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lights.is_empty()
    }

    /// One item per light, in collection order.
    pub fn items(&self) -> LightItems<'a> {
        LightItems {
            endpoint: self.endpoint,
            inner: self.lights.iter(),
        }
    }

    /// Item keys, in collection order.
    pub fn keys(&self) -> impl ExactSizeIterator<Item = &'a LightId> + 'a {
        self.items().map(|item| item.key())
    }

    pub fn widget(&self) -> List<'a> {
        List::new(self.items().map(|item| ListItem::new(item.line())))
    }
}

/// Single-pass iterator over the children of a [`LightList`].
#[derive(Debug, Clone)]
pub struct LightItems<'a> {
    endpoint: &'a Endpoint,
    inner: slice::Iter<'a, Light>,
}

impl<'a> Iterator for LightItems<'a> {
    type Item = LightItem<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let light = self.inner.next()?;
        Some(LightItem {
            endpoint: self.endpoint,
            light,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for LightItems<'_> {}

impl FusedIterator for LightItems<'_> {}

/// Child element for one light, keyed by the light's id.
#[derive(Debug, Clone, Copy)]
pub struct LightItem<'a> {
    endpoint: &'a Endpoint,
    light: &'a Light,
}

impl<'a> LightItem<'a> {
    pub fn key(&self) -> &'a LightId {
        &self.light.id
    }

    /// Endpoint forwarded from the list.
    pub fn endpoint(&self) -> &'a Endpoint {
        self.endpoint
    }

    /// Address of this light on the light server.
    pub fn resource_url(&self) -> String {
        self.endpoint.light_url(&self.light.id)
    }

    /// Plain display text: name (or id) followed by status attributes.
    pub fn label(&self) -> String {
        let mut label = self.title();
        for detail in self.details() {
            label.push_str("  ");
            label.push_str(&detail);
        }
        label
    }

    pub fn line(&self) -> Line<'a> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let detail_style = Style::default().fg(HEADER_SEPARATOR);

        let mut spans = vec![Span::styled(self.title(), text_style)];
        for (key, detail) in STATUS_ATTRIBUTES.iter().zip(self.detail_slots()) {
            let Some(detail) = detail else {
                continue;
            };
            let style = if *key == "power" {
                power_style(self.light)
            } else {
                detail_style
            };
            spans.push(Span::raw("  "));
            spans.push(Span::styled(detail, style));
        }
        Line::from(spans)
    }

    fn title(&self) -> String {
        match self.light.name() {
            Some(name) => name.to_string(),
            None => self.light.id.to_string(),
        }
    }

    fn details(&self) -> impl Iterator<Item = String> + '_ {
        self.detail_slots().into_iter().flatten()
    }

    fn detail_slots(&self) -> [Option<String>; 3] {
        STATUS_ATTRIBUTES.map(|key| {
            self.light
                .attribute_text(key)
                .map(|value| format!("{key}={value}"))
        })
    }
}

fn power_style(light: &Light) -> Style {
    match light.attribute_text("power").as_deref() {
        Some("on") => Style::default().fg(LIGHT_ON),
        _ => Style::default().fg(LIGHT_OFF),
    }
}
