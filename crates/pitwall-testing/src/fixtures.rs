use anyhow::Result;
use pitwall_types::SessionId;
use std::fs;
use std::path::{Path, PathBuf};

/// One lap row of a fixture session archive file.
///
/// Duration cells are written verbatim, so tests can exercise both the
/// plain-seconds and `M:SS.mmm` forms as well as blank (missing) cells.
#[derive(Debug, Clone, Default)]
pub struct FixtureLap {
    pub driver: &'static str,
    pub lap_number: u32,
    pub lap_time: &'static str,
    pub sector1_time: &'static str,
    pub sector2_time: &'static str,
    pub sector3_time: &'static str,
    pub compound: &'static str,
    pub stint: &'static str,
}

impl FixtureLap {
    pub fn timed(driver: &'static str, lap_number: u32, lap_time: &'static str) -> Self {
        Self {
            driver,
            lap_number,
            lap_time,
            ..Self::default()
        }
    }
}

/// Write a session CSV into `root` under the archive file-name convention,
/// returning the path.
pub fn write_session_csv(root: &Path, id: &SessionId, laps: &[FixtureLap]) -> Result<PathBuf> {
    fs::create_dir_all(root)?;
    let path = root.join(format!("{}.csv", id.file_stem()));

    let mut content = String::from(
        "driver,lap_number,lap_time,sector1_time,sector2_time,sector3_time,compound,stint\n",
    );
    for lap in laps {
        content.push_str(&format!(
            "{},{},{},{},{},{},{},{}\n",
            lap.driver,
            lap.lap_number,
            lap.lap_time,
            lap.sector1_time,
            lap.sector2_time,
            lap.sector3_time,
            lap.compound,
            lap.stint,
        ));
    }

    fs::write(&path, content)?;
    Ok(path)
}
