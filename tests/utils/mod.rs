use std::fs;
use std::path::Path;

use symptom_dx::{DataPaths, DiagnosisConfig};
use tempfile::TempDir;

/// Symptom rows in the layout of the published dataset: one row per
/// observation, repeated disease keys, padded values and empty trailing cells
pub const SYMPTOMS_CSV: &str = "\
Disease,Symptom_1,Symptom_2,Symptom_3,Symptom_4
Fungal Infection, itching, skin_rash, nodal_skin_eruptions,
Fungal Infection, itching, dischromic _patches,,
Common Cold, continuous_sneezing, chills, cough,
Common Cold, runny_nose, congestion,,
Pneumonia, chills, cough, high_fever, breathlessness
Bronchial Asthma, cough, breathlessness, mucoid_sputum,
Migraine, headache, nausea, blurred_and_distorted_vision,
Jaundice, itching, vomiting, yellowish_skin, dark_urine
Acne, skin_rash, pus_filled_pimples, blackheads,
";

pub const DESCRIPTIONS_CSV: &str = "\
Disease,Description
Common Cold,\"The common cold is a viral infection of your nose and throat.\"
Migraine,A migraine can cause severe throbbing pain.
Pneumonia,Pneumonia is an infection that inflames the air sacs.
Acne,Acne occurs when hair follicles become plugged.
";

pub const PRECAUTIONS_CSV: &str = "\
Disease,Precaution_1,Precaution_2,Precaution_3,Precaution_4
Common Cold,drink vitamin c rich drinks,take vapour,avoid cold food,keep fever in check
Migraine,meditation,reduce stress,use polaroid glasses in sun,consult doctor
Pneumonia,consult doctor,medication,rest,
";

/// Write text to a file inside the fixture directory
pub fn write_file(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).unwrap();
}

/// Temporary directory holding all three tables
#[must_use]
pub fn dataset_dir() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    let paths = DataPaths::in_dir(dir.path());
    fs::write(&paths.symptoms, SYMPTOMS_CSV).unwrap();
    fs::write(&paths.descriptions, DESCRIPTIONS_CSV).unwrap();
    fs::write(&paths.precautions, PRECAUTIONS_CSV).unwrap();
    dir
}

/// Configuration pointing at a fixture directory
#[must_use]
pub fn config_for(dir: &Path) -> DiagnosisConfig {
    DiagnosisConfig {
        paths: DataPaths::in_dir(dir),
        ..Default::default()
    }
}
