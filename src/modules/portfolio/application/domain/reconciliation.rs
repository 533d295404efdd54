//! Image-set reconciliation.
//!
//! Reconciling a mutation is split around the upload I/O:
//! [`plan_images`] binds every new slot to a binary of the request, the caller uploads
//! the planned binaries in order, and [`ImagePlan::resolve`] turns the returned URLs
//! into the final image list plus the sources that are no longer referenced.

use std::collections::HashSet;

use super::entities::{ImageDescriptor, PortfolioImage};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlannedImage {
    Keep(PortfolioImage),
    Upload {
        binary_index: usize,
        description: Option<String>,
        alt_text: Option<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePlan {
    slots: Vec<PlannedImage>,
    previous: Vec<PortfolioImage>,
    dropped: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReconciledImages {
    /// Final list, in target order.
    pub images: Vec<PortfolioImage>,
    /// Previous sources no longer referenced, in previous order, without duplicates.
    pub removed: Vec<String>,
}

/// Binds the Nth new descriptor to the Nth binary.
///
/// Only new descriptors advance the binary cursor. New descriptors left without a binary
/// are dropped. Kept descriptors are trusted as-is, empty source included.
pub fn plan_images(
    existing: &[PortfolioImage],
    target: Vec<ImageDescriptor>,
    available_binaries: usize,
) -> ImagePlan {
    let mut cursor = 0;
    let mut dropped = 0;
    let mut slots = Vec::with_capacity(target.len());

    for descriptor in target {
        match descriptor {
            ImageDescriptor::Kept {
                source,
                description,
                alt_text,
            } => slots.push(PlannedImage::Keep(PortfolioImage {
                source,
                description,
                alt_text,
            })),
            ImageDescriptor::New {
                description,
                alt_text,
            } => {
                if cursor < available_binaries {
                    slots.push(PlannedImage::Upload {
                        binary_index: cursor,
                        description,
                        alt_text,
                    });
                    cursor += 1;
                } else {
                    dropped += 1;
                }
            }
        }
    }

    ImagePlan {
        slots,
        previous: existing.to_vec(),
        dropped,
    }
}

impl ImagePlan {
    /// Binary indices to upload, in descriptor order.
    pub fn uploads(&self) -> impl Iterator<Item = usize> + '_ {
        self.slots.iter().filter_map(|slot| match slot {
            PlannedImage::Upload { binary_index, .. } => Some(*binary_index),
            PlannedImage::Keep(_) => None,
        })
    }

    pub fn upload_count(&self) -> usize {
        self.uploads().count()
    }

    /// New descriptors that found no binary.
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    /// `uploaded` holds one URL per planned upload, in [`ImagePlan::uploads`] order.
    pub fn resolve(self, uploaded: Vec<String>) -> ReconciledImages {
        let mut urls = uploaded.into_iter();

        let images: Vec<PortfolioImage> = self
            .slots
            .into_iter()
            .filter_map(|slot| match slot {
                PlannedImage::Keep(image) => Some(image),
                PlannedImage::Upload {
                    description,
                    alt_text,
                    ..
                } => urls.next().map(|source| PortfolioImage {
                    source,
                    description,
                    alt_text,
                }),
            })
            .collect();

        let removed = removed_sources(&self.previous, &images);

        ReconciledImages { images, removed }
    }
}

/// Sources of `previous` that `current` does not reference anymore.
pub fn removed_sources(previous: &[PortfolioImage], current: &[PortfolioImage]) -> Vec<String> {
    let kept: HashSet<&str> = current.iter().map(|img| img.source.as_str()).collect();
    let mut seen: HashSet<&str> = HashSet::new();

    previous
        .iter()
        .map(|img| img.source.as_str())
        .filter(|source| !source.is_empty() && !kept.contains(source))
        .filter(|source| seen.insert(*source))
        .map(str::to_string)
        .collect()
}
