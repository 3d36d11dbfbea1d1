#[cfg(test)]
mod tests {
    use caretrack::{RiskColumns, read_parquet, triage, write_parquet};

    use crate::utils::{f64_column, i64_column, patient_batch, string_column};

    #[test]
    fn test_annotated_dataset_survives_parquet() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("patients.parquet");
        let output = dir.path().join("patients_risk.parquet");

        let batch = patient_batch(&[100.0, 60.0, 10.0], &[Some(1), None, Some(0)]);
        write_parquet(&input, &[batch]).unwrap();

        let batches = read_parquet(&input).unwrap();
        let outcome = triage(&batches, &RiskColumns::adjusted(), true).unwrap();
        write_parquet(&output, &outcome.batches).unwrap();

        let annotated = read_parquet(&output).unwrap();
        assert_eq!(annotated.len(), 1);
        let batch = &annotated[0];
        assert_eq!(string_column(batch, "pnr"), vec!["p0", "p1", "p2"]);
        assert_eq!(i64_column(batch, "HIV_positive"), vec![1, 0, 0]);
        assert_eq!(f64_column(batch, "adjusted_disease_score"), vec![130.0, 60.0, 10.0]);
        assert_eq!(
            string_column(batch, "risk_level"),
            vec!["High Risk", "Medium Risk", "Low Risk"]
        );
    }

    #[test]
    fn test_write_without_batches_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(write_parquet(&dir.path().join("empty.parquet"), &[]).is_err());
    }

    #[test]
    fn test_read_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(read_parquet(&dir.path().join("missing.parquet")).is_err());
    }
}
