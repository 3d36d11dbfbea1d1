#[cfg(test)]
mod tests {
    use arrow::array::{BooleanArray, Float64Array, Int32Array};
    use arrow::datatypes::DataType;
    use caretrack::{Error, add_hiv_adjusted_score, add_hiv_adjusted_score_batches};

    use crate::utils::{
        batch_from, col, column_names, column_type, f64_column, i64_column, patient_batch,
        pnr_column, score_batch,
    };

    #[test]
    fn test_scenario_uplift_only_for_flagged_patients() {
        let batch = patient_batch(&[100.0, 100.0], &[Some(1), Some(0)]);
        let adjusted = add_hiv_adjusted_score(&batch).unwrap();

        assert_eq!(f64_column(&adjusted, "adjusted_disease_score"), vec![130.0, 100.0]);
        assert_eq!(i64_column(&adjusted, "HIV_positive"), vec![1, 0]);
    }

    #[test]
    fn test_scenario_missing_flag_column() {
        let adjusted = add_hiv_adjusted_score(&score_batch(&[100.0])).unwrap();

        assert_eq!(i64_column(&adjusted, "HIV_positive"), vec![0]);
        assert_eq!(f64_column(&adjusted, "adjusted_disease_score"), vec![100.0]);
        assert_eq!(
            column_names(&adjusted),
            vec!["pnr", "disease_score", "HIV_positive", "adjusted_disease_score"]
        );
    }

    #[test]
    fn test_null_flags_become_zero() {
        let batch = patient_batch(&[10.0, 20.0, 30.0], &[None, Some(1), None]);
        let adjusted = add_hiv_adjusted_score(&batch).unwrap();

        assert_eq!(i64_column(&adjusted, "HIV_positive"), vec![0, 1, 0]);
        assert_eq!(f64_column(&adjusted, "adjusted_disease_score"), vec![10.0, 26.0, 30.0]);
    }

    #[test]
    fn test_other_flag_values_are_kept_without_uplift() {
        let batch = patient_batch(&[50.0, 50.0, 50.0], &[Some(2), Some(-1), Some(1)]);
        let adjusted = add_hiv_adjusted_score(&batch).unwrap();

        assert_eq!(i64_column(&adjusted, "HIV_positive"), vec![2, -1, 1]);
        assert_eq!(f64_column(&adjusted, "adjusted_disease_score"), vec![50.0, 50.0, 65.0]);
    }

    #[test]
    fn test_flag_column_is_normalized_in_place() {
        let batch = batch_from(vec![
            col("HIV_positive", BooleanArray::from(vec![Some(true), None])),
            col("disease_score", Int32Array::from(vec![20, 20])),
        ]);
        let adjusted = add_hiv_adjusted_score(&batch).unwrap();

        assert_eq!(
            column_names(&adjusted),
            vec!["HIV_positive", "disease_score", "adjusted_disease_score"]
        );
        assert_eq!(column_type(&adjusted, "HIV_positive"), DataType::Int64);
        assert_eq!(i64_column(&adjusted, "HIV_positive"), vec![1, 0]);
        assert_eq!(f64_column(&adjusted, "adjusted_disease_score"), vec![26.0, 20.0]);
        // The original score column keeps its type
        assert_eq!(column_type(&adjusted, "disease_score"), DataType::Int32);
    }

    #[test]
    fn test_input_batch_is_untouched() {
        let batch = patient_batch(&[100.0], &[None]);
        let before = batch.clone();
        let _ = add_hiv_adjusted_score(&batch).unwrap();

        assert_eq!(batch, before);
        assert_eq!(batch.num_columns(), 3);
    }

    #[test]
    fn test_rerun_does_not_compound_uplift() {
        let batch = patient_batch(&[100.0, 40.0, 7.0], &[Some(1), Some(0), Some(1)]);
        let once = add_hiv_adjusted_score(&batch).unwrap();
        let twice = add_hiv_adjusted_score(&once).unwrap();

        assert_eq!(once, twice);
        assert_eq!(column_names(&once), column_names(&twice));
    }

    #[test]
    fn test_missing_score_column_fails() {
        let batch = batch_from(vec![("pnr", pnr_column(2))]);
        let err = add_hiv_adjusted_score(&batch).unwrap_err();

        assert!(matches!(
            err,
            Error::MissingField { ref column, row: None } if column == "disease_score"
        ));
    }

    #[test]
    fn test_null_score_fails_without_partial_result() {
        let batch = batch_from(vec![
            ("pnr", pnr_column(3)),
            col(
                "disease_score",
                Float64Array::from(vec![Some(1.0), Some(2.0), None]),
            ),
        ]);
        let err = add_hiv_adjusted_score(&batch).unwrap_err();

        assert!(matches!(err, Error::MissingField { row: Some(2), .. }));
    }

    #[test]
    fn test_batches_fail_as_a_whole() {
        let good = patient_batch(&[1.0], &[Some(1)]);
        let bad = batch_from(vec![("pnr", pnr_column(1))]);

        let adjusted = add_hiv_adjusted_score_batches(&[good.clone(), good.clone()]).unwrap();
        assert_eq!(adjusted.len(), 2);
        assert!(add_hiv_adjusted_score_batches(&[good, bad]).is_err());
    }
}
