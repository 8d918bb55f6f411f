use super::PlanStore;
use crate::error::Result;
use crate::model::MealPlan;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

const INDENT: &[u8] = b"    ";

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn write_plan<W: Write>(writer: W, plan: &MealPlan) -> Result<()> {
        let mut ser = Serializer::with_formatter(writer, PrettyFormatter::with_indent(INDENT));
        plan.serialize(&mut ser)?;
        let mut writer = ser.into_inner();
        writer.write_all(b"\n")?;
        writer.flush()?;
        Ok(())
    }
}

impl PlanStore for FileStore {
    fn save(&mut self, plan: &MealPlan) -> Result<PathBuf> {
        // The parent directory is not created: an unavailable path is a write failure.
        let file = File::create(&self.path)?;
        Self::write_plan(BufWriter::new(file), plan)?;
        tracing::debug!(path = %self.path.display(), "plan written");
        Ok(self.path.clone())
    }

    fn load(&self) -> Result<MealPlan> {
        let content = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&content)?)
    }

    fn location(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PlannerError;
    use crate::model::{DeliveryConfirmation, DeliveryStatus, GroceryDelivery, Preferences};

    fn sample_plan() -> MealPlan {
        let recipes = vec!["Risotto".to_string(), "Pasta Carbonara".to_string()];
        MealPlan::new(
            Preferences::new("Italian", "vegetarian", 2),
            recipes.clone(),
            DeliveryConfirmation {
                service: "GroceryNow".into(),
                status: DeliveryStatus::Success,
                recipes,
            }
            .into(),
        )
    }

    #[test]
    fn writes_four_space_indented_json() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("meal_plan.json"));
        let path = store.save(&sample_plan()).unwrap();

        let content = fs::read_to_string(path).unwrap();
        assert!(content.starts_with("{\n    \"preferences\": {\n        \"cuisine\": \"Italian\""));
        assert!(content.contains("\"grocery_delivery\""));
        assert!(content.ends_with("}\n"));
    }

    #[test]
    fn overwrites_previous_plan() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("meal_plan.json"));
        store.save(&sample_plan()).unwrap();

        let failed = MealPlan::new(
            Preferences::new("Thai", "", 2),
            Vec::new(),
            GroceryDelivery::empty(),
        );
        store.save(&failed).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded, failed);
        let content = fs::read_to_string(store.location()).unwrap();
        assert!(content.contains("\"grocery_delivery\": {}"));
        assert!(content.contains("\"recipes\": []"));
    }

    #[test]
    fn missing_directory_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("missing").join("meal_plan.json"));
        let err = store.save(&sample_plan()).unwrap_err();
        assert!(matches!(err, PlannerError::Io(_)));
    }
}
