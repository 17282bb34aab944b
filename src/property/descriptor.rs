use log::debug;

use super::grouping::ClassGroups;
use super::types::ClassDescriptor;

/// Turn the grouped classes into descriptors numbered from 1 in first-seen order
pub fn assemble_descriptors(groups: ClassGroups) -> Vec<ClassDescriptor> {
    let descriptors: Vec<ClassDescriptor> = groups
        .into_iter()
        .enumerate()
        .map(|(position, (classname, group))| ClassDescriptor {
            index: position + 1,
            classname,
            property_ids: group.property_ids,
            api_methods: group.api_methods,
        })
        .collect();

    debug!("Assembled {} class descriptors", descriptors.len());
    descriptors
}
