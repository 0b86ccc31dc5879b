use std::slice::Iter;

use scraper::{ElementRef, Html, Node};

use super::menu_section::MenuSection;
use crate::config::{LineFilter, MenuPageConfig};
use crate::parse::selectors;
use crate::parse::text::{clean_line, element_text, heading_text};
use crate::parse::tree::find_container;

static HEADER_TAG: &str = "header";

/// The daily menus of the lunch page, in the configured order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionMenu {
    sections: Vec<MenuSection>,
}

impl SectionMenu {
    /// Never fails: headings that can't be found or parsed end up as placeholders.
    pub fn from_html(document: &Html, config: &MenuPageConfig) -> Self {
        let headings: Vec<(ElementRef, String)> = document
            .select(selectors::headings())
            .map(|h| (h, heading_text(h)))
            .collect();
        let scope = headings
            .iter()
            .position(|(_, text)| text == config.scope_heading);
        if scope.is_none() {
            log::warn!(
                "\"{}\" heading not found, searching the whole page",
                config.scope_heading
            );
        }

        let sections = config
            .sections
            .iter()
            .map(|name| {
                let Some(heading) = find_heading(&headings, scope, name, config.scope_window)
                else {
                    log::warn!("no heading for {name}");
                    return MenuSection::new(name, vec![], config.placeholders.not_found);
                };
                let lines = section_lines(heading, config);
                log::debug!("{name}: {} line(s)", lines.len());
                MenuSection::new(name, lines, config.placeholders.no_items)
            })
            .collect();

        Self { sections }
    }

    pub fn iter(&self) -> Iter<MenuSection> {
        self.sections.iter()
    }

    #[cfg(test)]
    pub fn get(&self, name: &str) -> Option<&MenuSection> {
        self.sections.iter().find(|s| s.name() == name)
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }
}

impl<'a> IntoIterator for &'a SectionMenu {
    type Item = &'a MenuSection;
    type IntoIter = Iter<'a, MenuSection>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn find_heading<'a>(
    headings: &[(ElementRef<'a>, String)],
    scope: Option<usize>,
    name: &str,
    window: usize,
) -> Option<ElementRef<'a>> {
    scope
        .and_then(|start| {
            headings
                .iter()
                .skip(start + 1)
                .take(window)
                .find(|(_, text)| text == name)
        })
        .or_else(|| headings.iter().find(|(_, text)| text == name))
        .map(|(heading, _)| *heading)
}

fn section_lines(heading: ElementRef, config: &MenuPageConfig) -> Vec<String> {
    let container = find_container(heading, config.container_depth, HEADER_TAG);

    let mut lines = vec![];
    if let Some(header) = container.select(selectors::headers()).next() {
        lines.extend(clean_line(&element_text(header), &config.filter));
        // only direct siblings; paragraphs nested further down are ignored
        lines.extend(
            header
                .next_siblings()
                .filter_map(ElementRef::wrap)
                .filter(|el| el.value().name() == "p")
                .filter_map(|p| clean_line(&element_text(p), &config.filter)),
        );
    }

    if lines.is_empty() {
        lines = lines_after_heading(heading, &config.filter);
    }
    lines
}

/// Everything between the heading and the next heading of the same level.
/// Starts from the heading, not the container, so unrelated trailing content
/// can slip in when the page layout differs.
fn lines_after_heading(heading: ElementRef, filter: &LineFilter) -> Vec<String> {
    let level = heading.value().name();
    let mut lines = vec![];
    for sibling in heading.next_siblings() {
        let raw = match sibling.value() {
            Node::Element(el) if el.name() == level => break,
            Node::Element(_) => ElementRef::wrap(sibling).map(element_text),
            Node::Text(text) => Some(String::from(&**text)),
            _ => None,
        };
        lines.extend(raw.and_then(|raw| clean_line(&raw, filter)));
    }
    lines
}
