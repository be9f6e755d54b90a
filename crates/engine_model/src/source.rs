//! The section source handed to the host engine

use crate::{lower_section, SectionDescriptor};
use layout_model::{LayoutEnvironment, Section};
use std::fmt;
use std::sync::Arc;

/// A closure producing the section at an index, or `None` past the end
pub type SectionProvider =
    Arc<dyn Fn(usize, &LayoutEnvironment) -> Option<Section> + Send + Sync>;

/// Where the host engine gets its sections from: one fixed section, a
/// fixed ordered list, or a dynamic provider.
#[derive(Clone)]
pub enum LayoutSource {
    /// Every section index resolves to the same definition
    Single(Section),
    /// One definition per index; out-of-range indexes resolve to `None`
    Sections(Vec<Section>),
    /// Sections are produced on demand from the index and environment
    Provider(SectionProvider),
}

impl LayoutSource {
    /// Wrap a closure as a dynamic section provider
    pub fn provider<F>(provider: F) -> Self
    where
        F: Fn(usize, &LayoutEnvironment) -> Option<Section> + Send + Sync + 'static,
    {
        LayoutSource::Provider(Arc::new(provider))
    }

    /// Resolve and lower the section at `index`. `None` means there is
    /// no section at that index; the host treats it as the end of the
    /// layout, not as an error.
    pub fn section_at(
        &self,
        index: usize,
        environment: &LayoutEnvironment,
    ) -> Option<SectionDescriptor> {
        match self {
            LayoutSource::Single(section) => Some(lower_section(section)),
            LayoutSource::Sections(sections) => {
                if index >= sections.len() {
                    tracing::trace!(index, count = sections.len(), "section index out of range");
                }
                sections.get(index).map(lower_section)
            }
            LayoutSource::Provider(provider) => {
                provider(index, environment).map(|section| lower_section(&section))
            }
        }
    }
}

impl fmt::Debug for LayoutSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutSource::Single(section) => f.debug_tuple("Single").field(section).finish(),
            LayoutSource::Sections(sections) => f.debug_tuple("Sections").field(sections).finish(),
            LayoutSource::Provider(_) => f.debug_tuple("Provider").field(&"..").finish(),
        }
    }
}
