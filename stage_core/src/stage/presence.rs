//! Presence tracking - who is on stage and who is asleep there.

use thiserror::Error;

/// A presence change that does not fit the current stage.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PresenceError {
    #[error("{0} is not on stage")]
    NotOnStage(String),
}

/// The characters currently on stage.
///
/// Names are kept exactly as the directions gave them (aliases are only
/// resolved when co-appearances are recorded). The list holds no
/// duplicates and the asleep list is always a subset of it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OnStage {
    present: Vec<String>,
    asleep: Vec<String>,
}

impl OnStage {
    /// Create an empty stage.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn present(&self) -> &[String] {
        &self.present
    }

    pub fn asleep(&self) -> &[String] {
        &self.asleep
    }

    pub fn is_empty(&self) -> bool {
        self.present.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.present.iter().any(|p| p == name)
    }

    pub fn is_asleep(&self, name: &str) -> bool {
        self.asleep.iter().any(|p| p == name)
    }

    /// Bring characters on stage. Returns how many were not already there.
    pub fn enter<S: AsRef<str>>(&mut self, names: &[S]) -> usize {
        let mut entered = 0;
        for name in names {
            let name = name.as_ref();
            if !self.contains(name) {
                self.present.push(name.to_string());
                entered += 1;
            }
        }
        entered
    }

    /// Take a character off stage.
    pub fn remove(&mut self, name: &str) -> Result<(), PresenceError> {
        let index = self
            .present
            .iter()
            .position(|p| p == name)
            .ok_or_else(|| PresenceError::NotOnStage(name.to_string()))?;
        self.present.remove(index);
        self.asleep.retain(|a| a != name);
        Ok(())
    }

    /// Mark an on-stage character as asleep.
    pub fn fall_asleep(&mut self, name: &str) -> Result<(), PresenceError> {
        if !self.contains(name) {
            return Err(PresenceError::NotOnStage(name.to_string()));
        }
        if !self.is_asleep(name) {
            self.asleep.push(name.to_string());
        }
        Ok(())
    }

    /// Wake a character. Returns false if they were not asleep.
    pub fn wake(&mut self, name: &str) -> bool {
        let before = self.asleep.len();
        self.asleep.retain(|a| a != name);
        self.asleep.len() != before
    }

    /// Everyone awake leaves. Returns who left.
    pub fn exeunt_awake(&mut self) -> Vec<String> {
        let asleep = &self.asleep;
        let (stay, leave): (Vec<_>, Vec<_>) = self
            .present
            .drain(..)
            .partition(|p| asleep.iter().any(|a| a == p));
        self.present = stay;
        leave
    }

    /// Everyone not named leaves, asleep or not. Returns who left.
    pub fn retain_only<S: AsRef<str>>(&mut self, names: &[S]) -> Vec<String> {
        let keep = |p: &String| names.iter().any(|n| n.as_ref() == p.as_str());
        let (stay, leave): (Vec<_>, Vec<_>) = self.present.drain(..).partition(keep);
        self.present = stay;
        self.asleep.retain(keep);
        leave
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enter_skips_duplicates() {
        let mut stage = OnStage::new();
        assert_eq!(stage.enter(&["Quince", "Bottom"]), 2);
        assert_eq!(stage.enter(&["Bottom", "Flute"]), 1);
        assert_eq!(stage.present(), &["Quince", "Bottom", "Flute"]);
    }

    #[test]
    fn test_remove_absent_is_error() {
        let mut stage = OnStage::new();
        stage.enter(&["Puck"]);

        assert_eq!(
            stage.remove("Oberon"),
            Err(PresenceError::NotOnStage("Oberon".into()))
        );
        assert!(stage.contains("Puck"));
        assert!(stage.remove("Puck").is_ok());
        assert!(stage.is_empty());
    }

    #[test]
    fn test_sleepers_survive_exeunt() {
        let mut stage = OnStage::new();
        stage.enter(&["Titania", "Bottom", "Peaseblossom"]);
        stage.fall_asleep("Titania").unwrap();

        let left = stage.exeunt_awake();

        assert_eq!(left, vec!["Bottom", "Peaseblossom"]);
        assert_eq!(stage.present(), &["Titania"]);
        assert!(stage.is_asleep("Titania"));
    }

    #[test]
    fn test_retain_only_ignores_sleep() {
        let mut stage = OnStage::new();
        stage.enter(&["Titania", "Bottom", "Oberon"]);
        stage.fall_asleep("Titania").unwrap();

        let left = stage.retain_only(&["Bottom"]);

        assert_eq!(left, vec!["Titania", "Oberon"]);
        assert_eq!(stage.present(), &["Bottom"]);
        assert!(stage.asleep().is_empty());
    }

    #[test]
    fn test_fall_asleep_requires_presence() {
        let mut stage = OnStage::new();
        assert!(stage.fall_asleep("Lysander").is_err());
        assert!(stage.asleep().is_empty());
    }

    #[test]
    fn test_wake_and_remove_clear_sleep() {
        let mut stage = OnStage::new();
        stage.enter(&["Lysander", "Hermia"]);
        stage.fall_asleep("Lysander").unwrap();
        stage.fall_asleep("Hermia").unwrap();

        assert!(stage.wake("Lysander"));
        assert!(!stage.wake("Lysander"));
        stage.remove("Hermia").unwrap();
        assert!(stage.asleep().is_empty());
    }
}
