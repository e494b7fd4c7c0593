use crate::error::{CoreError, Result};
use crate::instance::{INSTANCE_API_VERSION, INSTANCE_KIND, Instance};
use crate::meta::{ObjectMeta, OwnerReference};

/// Attach `owner` as the controlling owner of the resource behind `meta`.
///
/// The owner-reference list is rebuilt rather than appended to, so repeated
/// reconcile passes leave metadata unchanged. Fails when the instance has no
/// platform-assigned uid yet; without it the cascade relation cannot be
/// expressed.
pub fn set_controller_reference(owner: &Instance, meta: &mut ObjectMeta) -> Result<()> {
    let uid = owner
        .uid
        .as_deref()
        .ok_or_else(|| CoreError::missing_owner_uid(&owner.namespace, &owner.name))?;

    meta.owner_references = vec![OwnerReference {
        api_version: INSTANCE_API_VERSION.to_string(),
        kind: INSTANCE_KIND.to_string(),
        name: owner.name.clone(),
        uid: uid.to_string(),
        controller: true,
        block_owner_deletion: true,
    }];

    Ok(())
}
