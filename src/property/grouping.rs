use std::collections::BTreeSet;

use indexmap::IndexMap;
use indexmap::map::Entry;
use log::{debug, trace, warn};

use crate::error::Result;
use super::resolver::resolve_classname;
use super::types::PropertyRecord;

/// Properties aggregated under one API class
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassGroup {
    /// Property identifiers in encounter order
    pub property_ids: Vec<String>,

    /// Method set of the first property seen for this class
    pub api_methods: BTreeSet<String>,

    /// Identifier of the property that fixed the method set
    pub first_property: String,
}

/// Class name to group, in first-seen order
pub type ClassGroups = IndexMap<String, ClassGroup>;

/// Fold the properties into per-class groups.
///
/// Properties without an API class are skipped. A class keeps the method set
/// of the first property that maps to it; later properties only add their
/// identifiers.
pub fn group_properties(properties: &[PropertyRecord], prefix: &str) -> Result<ClassGroups> {
    let groups = properties
        .iter()
        .filter(|property| !property.api_class.is_absent())
        .try_fold(ClassGroups::new(), |mut groups, property| -> Result<ClassGroups> {
            let classname = resolve_classname(property, prefix)?;

            match groups.entry(classname) {
                Entry::Occupied(mut entry) => {
                    let group = entry.get();
                    if group.api_methods != property.api_methods {
                        warn!(
                            "{} declares api_methods {:?} but {} already fixed {:?} for {}; keeping the first",
                            property.property_id,
                            property.api_methods,
                            group.first_property,
                            group.api_methods,
                            entry.key()
                        );
                    }
                    entry.get_mut().property_ids.push(property.property_id.clone());
                }
                Entry::Vacant(entry) => {
                    debug!("New API class {} from {}", entry.key(), property.property_id);
                    entry.insert(ClassGroup {
                        property_ids: vec![property.property_id.clone()],
                        api_methods: property.api_methods.clone(),
                        first_property: property.property_id.clone(),
                    });
                }
            }

            Ok(groups)
        })?;

    debug!("Grouped {} properties into {} API classes", properties.len(), groups.len());
    if log::log_enabled!(log::Level::Trace) {
        let summary = groups
            .iter()
            .map(|(classname, group)| format!("{} ({})", classname, group.property_ids.len()))
            .collect::<Vec<_>>()
            .join(", ");
        trace!("API classes: {}", summary);
    }
    Ok(groups)
}
