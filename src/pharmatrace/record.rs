//! # Record Codec
//!
//! Wire format for the ledger blob, mirrored line-for-line from the
//! deployed contract storage:
//!
//! ```text
//! <kind>#<field1>#<field2>#...#<fieldN>\n
//! ```
//!
//! Fields are joined by `#`; records are separated by newlines. Neither
//! character can appear inside a field, so [`encode_record`] rejects such
//! values up front rather than writing a blob that can never be decoded.
//!
//! Decoding is lenient the other way around: [`decode_blob`] skips lines
//! that do not split into the expected field count and reports how many
//! were dropped, so one corrupt line cannot take down a whole read.

use crate::error::{Result, TraceError};
use crate::model::{Record, RecordKind};

/// Reserved field separator in the encoded line format.
pub const FIELD_DELIMITER: char = '#';

/// Encode a record as a single delimited line (no trailing newline).
///
/// Fails with [`TraceError::ReservedDelimiter`] if any field contains the
/// delimiter or a newline.
pub fn encode_record(record: &Record) -> Result<String> {
    let mut line = String::from(record.kind.as_str());
    for field in &record.fields {
        if field.contains(FIELD_DELIMITER) || field.contains('\n') {
            return Err(TraceError::ReservedDelimiter(field.clone()));
        }
        line.push(FIELD_DELIMITER);
        line.push_str(field);
    }
    Ok(line)
}

/// Decode one line into a record. The line must carry a known kind tag and
/// exactly the field count that kind requires.
pub fn decode_line(line: &str) -> Result<Record> {
    let mut parts = line.split(FIELD_DELIMITER);
    let tag = parts.next().unwrap_or("");
    let kind: RecordKind = tag.parse()?;

    let fields: Vec<String> = parts.map(str::to_string).collect();
    if fields.len() != kind.field_count() {
        return Err(TraceError::MalformedRecord {
            expected: kind.field_count(),
            got: fields.len(),
        });
    }
    Ok(Record::new(kind, fields))
}

/// Outcome of decoding a blob: the records that parsed, plus a count of
/// lines that were dropped (malformed, unknown kind, or a different kind
/// than requested).
#[derive(Debug, Default)]
pub struct DecodeReport {
    pub records: Vec<Record>,
    pub skipped: usize,
}

/// Decode a whole blob, keeping only records of `kind`.
///
/// Bad lines are skipped, never fatal: the ledger is append-only from many
/// writers and a single corrupt row must not hide every other record.
pub fn decode_blob(blob: &str, kind: RecordKind) -> DecodeReport {
    let mut report = DecodeReport::default();
    for line in blob.lines() {
        if line.trim().is_empty() {
            continue;
        }
        match decode_line(line) {
            Ok(record) if record.kind == kind => report.records.push(record),
            _ => report.skipped += 1,
        }
    }
    report
}

/// Encode a record set into one blob, one line per record, each terminated
/// by a newline.
pub fn encode_blob(records: &[Record]) -> Result<String> {
    let mut blob = String::new();
    for record in records {
        blob.push_str(&encode_record(record)?);
        blob.push('\n');
    }
    Ok(blob)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aspirin() -> Record {
        Record::new(
            RecordKind::AddProduct,
            vec![
                "Aspirin".into(),
                "5.00".into(),
                "100".into(),
                "pain relief".into(),
                "img.png".into(),
                "2025-01-01".into(),
                "Manufactured".into(),
            ],
        )
    }

    #[test]
    fn test_encode_decode_roundtrip() {
        let record = aspirin();
        let line = encode_record(&record).unwrap();
        assert_eq!(
            line,
            "addproduct#Aspirin#5.00#100#pain relief#img.png#2025-01-01#Manufactured"
        );
        assert_eq!(decode_line(&line).unwrap(), record);
    }

    #[test]
    fn test_encode_rejects_delimiter_in_field() {
        let mut record = aspirin();
        record.fields[3] = "pain#relief".into();
        match encode_record(&record) {
            Err(TraceError::ReservedDelimiter(field)) => assert_eq!(field, "pain#relief"),
            other => panic!("expected ReservedDelimiter, got {:?}", other),
        }
    }

    #[test]
    fn test_encode_rejects_newline_in_field() {
        let mut record = aspirin();
        record.fields[6] = "Shipped\nReceived".into();
        assert!(encode_record(&record).is_err());
    }

    #[test]
    fn test_decode_line_wrong_field_count() {
        let result = decode_line("addproduct#Aspirin#5.00");
        match result {
            Err(TraceError::MalformedRecord { expected, got }) => {
                assert_eq!(expected, 7);
                assert_eq!(got, 2);
            }
            other => panic!("expected MalformedRecord, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_line_unknown_kind() {
        assert!(decode_line("removeproduct#Aspirin").is_err());
    }

    #[test]
    fn test_decode_blob_skips_bad_lines() {
        let blob = "addproduct#Aspirin#5.00#100#pain relief#img.png#2025-01-01#Manufactured\n\
                    garbage line without delimiters\n\
                    addproduct#truncated#row\n\
                    addproduct#Tylenol#12.99#1000#analgesic#tylenol.svg#2025-09-21#Distributed\n";
        let report = decode_blob(blob, RecordKind::AddProduct);
        assert_eq!(report.records.len(), 2);
        assert_eq!(report.skipped, 2);
        assert_eq!(report.records[0].name(), "Aspirin");
        assert_eq!(report.records[1].name(), "Tylenol");
    }

    #[test]
    fn test_decode_blob_filters_other_kinds() {
        let blob = "signup#jane#pw#555#j@e.com#addr#Jane Doe\n\
                    addproduct#Aspirin#5.00#100#pain relief#img.png#2025-01-01#Manufactured\n";
        let report = decode_blob(blob, RecordKind::AddProduct);
        assert_eq!(report.records.len(), 1);
        assert_eq!(report.skipped, 1);

        let report = decode_blob(blob, RecordKind::Signup);
        assert_eq!(report.records.len(), 1);
        assert_eq!(report.records[0].name(), "jane");
    }

    #[test]
    fn test_decode_blob_empty_and_blank() {
        assert!(decode_blob("", RecordKind::AddProduct).records.is_empty());
        let report = decode_blob("\n\n  \n", RecordKind::AddProduct);
        assert!(report.records.is_empty());
        assert_eq!(report.skipped, 0);
    }

    #[test]
    fn test_encode_blob_shape() {
        let records = vec![aspirin(), aspirin()];
        let blob = encode_blob(&records).unwrap();
        assert_eq!(blob.lines().count(), 2);
        assert!(blob.ends_with('\n'));

        let report = decode_blob(&blob, RecordKind::AddProduct);
        assert_eq!(report.records, records);
        assert_eq!(report.skipped, 0);
    }
}
