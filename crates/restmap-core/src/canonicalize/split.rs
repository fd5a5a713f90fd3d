//! Multi-location split for parentless resources

use crate::model::Resource;
use crate::ops::Store;
use crate::template;

use super::tree::remove_detaching;

/// Replace each parentless resource holding several resolved locations with
/// one resource per location
///
/// Each split resource is named `original + '.' + lastSegment` (braces
/// stripped when the segment is a bare variable) and carries the original's
/// documentation, methods, and template variables plus exactly that one
/// location. The original is deleted and its children detached.
pub(crate) fn split_multi_location(store: &mut Store) {
    for name in store.resource_names() {
        let Ok(resource) = store.get_resource(&name) else {
            continue;
        };
        if !resource.parents.is_empty() || resource.locations.len() < 2 {
            continue;
        }
        let original = resource.clone();

        for location in &original.locations {
            let Some(segment) = template::last_segment(location) else {
                continue;
            };
            let mut split = Resource::new(format!("{}.{}", name, segment));
            split.documentation = original.documentation.clone();
            split.methods = original.methods.clone();
            split.template_vars = original.template_vars.clone();
            split.locations = vec![location.clone()];
            store.insert_resource(split);
        }
        remove_detaching(store, &name);
    }
}
