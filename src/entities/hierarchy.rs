//! Container records: teams, spaces, folders and lists.
//!
//! Containers only carry an id and a name as far as this crate is concerned.
//! Parent links are not read from the records; the sync walks the tree from
//! the top and knows each parent positionally.

use serde::Deserialize;

use super::{id_string, Resource, ResourceKind};

macro_rules! container {
    ($(#[$meta:meta])* $name:ident, $kind:expr) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
        pub struct $name {
            #[serde(deserialize_with = "id_string")]
            pub id: String,
            #[serde(default)]
            pub name: String,
        }

        impl Resource for $name {
            const KIND: ResourceKind = $kind;

            fn id(&self) -> &str {
                &self.id
            }

            fn name(&self) -> &str {
                &self.name
            }
        }
    };
}

container!(
    /// A workspace; root of the hierarchy.
    Team,
    ResourceKind::Team
);
container!(
    /// A space inside a team.
    Space,
    ResourceKind::Space
);
container!(
    /// A folder inside a space.
    Folder,
    ResourceKind::Folder
);
container!(
    /// A list, either inside a folder or directly inside a space.
    List,
    ResourceKind::List
);
