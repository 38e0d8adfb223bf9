//! Font discovery

use std::fs;
use std::path::Path;

use fontdb::{Database, Family, Query};

use crate::errors::{Result, ShotError};

/// Read a font file from disk
pub fn load_font_bytes(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|e| ShotError::io(path, e))
}

/// Find a monospace face among the installed system fonts
///
/// Returns the font file data and the face index inside it (for `.ttc`
/// collections).
pub fn system_monospace() -> Result<(Vec<u8>, u32)> {
    let mut db = Database::new();
    db.load_system_fonts();
    tracing::debug!("Scanned {} system font faces", db.len());

    let query = Query {
        families: &[Family::Monospace],
        ..Query::default()
    };
    let id = db
        .query(&query)
        .or_else(|| db.faces().find(|face| face.monospaced).map(|face| face.id))
        .ok_or(ShotError::FontNotFound)?;

    if let Some(face) = db.face(id) {
        tracing::info!(
            "Using system font {}",
            face.families
                .first()
                .map_or("<unnamed>", |(name, _)| name.as_str())
        );
    }

    db.with_face_data(id, |data, index| (data.to_vec(), index))
        .ok_or(ShotError::FontNotFound)
}
