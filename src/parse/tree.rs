use scraper::ElementRef;

/// Tag names that usually wrap a heading together with its content.
pub const CONTAINER_TAGS: [&str; 3] = ["section", "article", "div"];

/// The handful of tree queries the container walk needs.
pub trait MarkupNode: Copy {
    fn tag_name(&self) -> &str;
    fn parent_element(&self) -> Option<Self>;
    /// Whether any element strictly below this one has the given tag.
    fn contains_tag(&self, tag: &str) -> bool;
}

impl MarkupNode for ElementRef<'_> {
    fn tag_name(&self) -> &str {
        self.value().name()
    }

    fn parent_element(&self) -> Option<Self> {
        self.parent().and_then(ElementRef::wrap)
    }

    fn contains_tag(&self, tag: &str) -> bool {
        self.descendants()
            .skip(1)
            .filter_map(ElementRef::wrap)
            .any(|el| el.value().name() == tag)
    }
}

/// Climbs at most `max_depth` ancestors of `heading` looking for a structural
/// container that holds a `marker` element. Falls back to the heading itself.
pub fn find_container<N: MarkupNode>(heading: N, max_depth: usize, marker: &str) -> N {
    let mut current = heading;
    for _ in 0..max_depth {
        let Some(parent) = current.parent_element() else {
            break;
        };
        if CONTAINER_TAGS.contains(&parent.tag_name()) && parent.contains_tag(marker) {
            return parent;
        }
        current = parent;
    }
    heading
}
