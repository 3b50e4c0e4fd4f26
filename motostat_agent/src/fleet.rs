//! Where the motos come from: a JSON fleet file or an in-memory demo fleet.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::types::{Moto, MotoStatus};

#[derive(Debug, thiserror::Error)]
pub enum FleetError {
    #[error("cannot read fleet file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed fleet file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type SharedFleet = Arc<Mutex<Vec<Moto>>>;

#[derive(Clone, Debug)]
pub enum FleetSource {
    /// Re-read on every request so edits show up on the next poll.
    File(PathBuf),
    Memory(SharedFleet),
}

impl FleetSource {
    pub fn memory(motos: Vec<Moto>) -> Self {
        Self::Memory(Arc::new(Mutex::new(motos)))
    }

    pub async fn load(&self) -> Result<Vec<Moto>, FleetError> {
        match self {
            Self::File(path) => load_fleet_file(path).await,
            Self::Memory(fleet) => Ok(fleet.lock().await.clone()),
        }
    }
}

pub async fn load_fleet_file(path: &Path) -> Result<Vec<Moto>, FleetError> {
    let bytes = tokio::fs::read(path).await.map_err(|source| FleetError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_slice(&bytes).map_err(|source| FleetError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Maintenance and inactivity both come back to the available pool.
pub fn next_status(s: MotoStatus) -> MotoStatus {
    match s {
        MotoStatus::Disponivel => MotoStatus::EmUso,
        MotoStatus::EmUso => MotoStatus::Manutencao,
        MotoStatus::Manutencao => MotoStatus::Disponivel,
        MotoStatus::Inativa => MotoStatus::Disponivel,
        MotoStatus::Outro => MotoStatus::Disponivel,
    }
}

pub fn demo_fleet() -> Vec<Moto> {
    use MotoStatus::*;
    let seed = [
        ("BRA2E19", "Mottu Sport 110i", Disponivel),
        ("FIA1C23", "Mottu Sport 110i", Disponivel),
        ("QWE4R56", "Honda CG 160", EmUso),
        ("RTY7U89", "Mottu-E", Disponivel),
        ("PLM3N45", "Yamaha Factor 150", Manutencao),
        ("KJH6G78", "Mottu Sport 110i", Disponivel),
        ("ZXC9V01", "Honda CG 160", EmUso),
        ("ASD2F34", "Mottu-E", Inativa),
        ("GHJ5K67", "Mottu Sport 110i", Disponivel),
        ("VBN8M90", "Yamaha Factor 150", EmUso),
        ("TGB1Y23", "Mottu-E", Disponivel),
        ("UJM4I56", "Honda CG 160", Disponivel),
    ];
    seed.into_iter()
        .enumerate()
        .map(|(i, (placa, modelo, status))| Moto {
            id: i as u64 + 1,
            placa: placa.into(),
            modelo: modelo.into(),
            status,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::io::Write;

    #[tokio::test]
    async fn loads_file_fleet_fresh_each_time() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        write!(
            f,
            r#"[{{"id":1,"placa":"BRA2E19","status":"DISPONIVEL"}}]"#
        )
        .unwrap();
        let src = FleetSource::File(f.path().to_path_buf());
        assert_eq!(src.load().await.unwrap().len(), 1);

        std::fs::write(
            f.path(),
            r#"[{"id":1,"placa":"BRA2E19","status":"DISPONIVEL"},{"id":2,"placa":"FIA1C23","status":"INATIVA"}]"#,
        )
        .unwrap();
        assert_eq!(src.load().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn missing_and_malformed_files_are_errors() {
        let dir = tempfile::tempdir().unwrap();
        let missing = FleetSource::File(dir.path().join("nope.json"));
        assert!(matches!(missing.load().await, Err(FleetError::Io { .. })));

        let bad = dir.path().join("bad.json");
        std::fs::write(&bad, "{ not json").unwrap();
        assert!(matches!(
            FleetSource::File(bad).load().await,
            Err(FleetError::Parse { .. })
        ));
    }

    #[test]
    fn demo_fleet_has_unique_ids_and_alerts() {
        let fleet = demo_fleet();
        let ids: HashSet<u64> = fleet.iter().map(|m| m.id).collect();
        assert_eq!(ids.len(), fleet.len());
        assert!(fleet
            .iter()
            .any(|m| matches!(m.status, MotoStatus::Manutencao | MotoStatus::Inativa)));
    }

    #[test]
    fn rotation_never_gets_stuck() {
        let mut s = MotoStatus::Inativa;
        for _ in 0..4 {
            s = next_status(s);
        }
        assert_ne!(s, MotoStatus::Inativa);
        assert_eq!(next_status(MotoStatus::Manutencao), MotoStatus::Disponivel);
    }
}
