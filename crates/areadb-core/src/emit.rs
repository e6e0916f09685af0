// crates/areadb-core/src/emit.rs

//! Field-order serialization of a normalized set.
//!
//! One comma-joined line per record, no header, no quoting:
//! `id,parent,name,reading,address,post`. A root's parent field is the
//! key type's root form ([`RecordKey::ROOT`]) and a missing postal code
//! emits as an empty trailing field, so division rows keep their
//! trailing-comma layout.

use crate::error::{AreaError, Result};
use crate::model::{Record, RecordKey};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

pub fn write_rows<K: RecordKey, W: Write>(records: &[Record<K>], writer: &mut W) -> Result<()> {
    for (i, rec) in records.iter().enumerate() {
        if i > 0 {
            writer.write_all(b"\n")?;
        }
        match &rec.parent {
            Some(parent) => write!(writer, "{},{}", rec.id, parent)?,
            None => write!(writer, "{},{}", rec.id, K::ROOT)?,
        }
        write!(
            writer,
            ",{},{},{},{}",
            rec.name,
            rec.reading,
            rec.address,
            rec.post.as_deref().unwrap_or("")
        )?;
    }
    Ok(())
}

/// Renders the set to a single string. Handy for tests and small tables.
pub fn to_string<K: RecordKey>(records: &[Record<K>]) -> Result<String> {
    let mut buf = Vec::new();
    write_rows(records, &mut buf)?;
    String::from_utf8(buf).map_err(|e| AreaError::InvalidData(e.to_string()))
}

/// Writes the set to `path`. Nothing is written unless the records were
/// fully normalized first, so a failed run leaves no partial output.
pub fn save_to_path<K: RecordKey>(records: &[Record<K>], path: impl AsRef<Path>) -> Result<()> {
    let file = File::create(path.as_ref()).map_err(AreaError::Io)?;
    let mut writer = BufWriter::new(file);
    write_rows(records, &mut writer)?;
    writer.flush().map_err(AreaError::Io)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn division_rows_keep_trailing_field() {
        let records = vec![
            Record {
                id: "110000000000".to_string(),
                parent: None,
                name: "Beijing".to_string(),
                reading: "bei jing".to_string(),
                address: "Beijing".to_string(),
                post: None,
            },
            Record {
                id: "110100000000".to_string(),
                parent: Some("110000000000".to_string()),
                name: "Dongcheng".to_string(),
                reading: "dong cheng".to_string(),
                address: "BeijingDongcheng".to_string(),
                post: None,
            },
        ];
        let out = to_string(&records).unwrap();
        assert_eq!(
            out,
            "110000000000,,Beijing,bei jing,Beijing,\n\
             110100000000,110000000000,Dongcheng,dong cheng,BeijingDongcheng,"
        );
    }

    #[test]
    fn postal_roots_emit_zero_parent() {
        let records = vec![Record {
            id: 1u64,
            parent: None,
            name: "東京都".to_string(),
            reading: "ﾄｳｷｮｳﾄ".to_string(),
            address: "東京都".to_string(),
            post: None,
        }];
        let out = to_string(&records).unwrap();
        assert_eq!(out, "1,0,東京都,ﾄｳｷｮｳﾄ,東京都,");
    }
}
