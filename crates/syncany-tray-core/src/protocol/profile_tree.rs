use serde::Deserialize;

/// Profiles and their folders, as sent with a menu update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct ProfileTree {
    profiles: Vec<Profile>,
}

impl ProfileTree {
    /// Build a tree from profiles.
    pub fn new(profiles: Vec<Profile>) -> Self {
        Self { profiles }
    }

    /// The profiles, in the order they were sent.
    pub fn profiles(&self) -> &[Profile] {
        &self.profiles
    }
}

/// One sync profile.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Profile {
    /// Profile name, usually a path.
    pub name: String,
    /// Folders synced by this profile.
    #[serde(default)]
    pub folders: Vec<Folder>,
}

/// One synced folder.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Folder {
    /// Absolute path of the folder.
    pub folder: String,
}
