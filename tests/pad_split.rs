// tests/pad_split.rs
use twits_preprocessor::{pad_sequences, split, PipelineError};

#[test]
fn pad_short_and_truncate_long() {
    assert_eq!(pad_sequences(&[vec![1, 2]], 5).unwrap(), vec![vec![0, 0, 0, 1, 2]]);
    assert_eq!(
        pad_sequences(&[vec![1, 2, 3, 4, 5, 6]], 4).unwrap(),
        vec![vec![3, 4, 5, 6]]
    );
}

#[test]
fn padded_tail_reproduces_the_input() {
    let seqs: Vec<Vec<usize>> = vec![vec![9], vec![1, 2, 3], vec![]];
    let padded = pad_sequences(&seqs, 4).unwrap();
    for (orig, row) in seqs.iter().zip(&padded) {
        assert_eq!(row.len(), 4);
        assert_eq!(&row[4 - orig.len()..], orig.as_slice());
        assert!(row[..4 - orig.len()].iter().all(|&v| v == 0));
    }
}

#[test]
fn split_ten_records_eighty_twenty() {
    let x: Vec<Vec<usize>> = (0..10).map(|i| vec![i]).collect();
    let y: Vec<u8> = (0..10).map(|i| (i % 2) as u8).collect();
    let s = split(x, y, 0.8).unwrap();
    assert_eq!(s.train_len(), 8);
    assert_eq!(s.val_len(), 1);
    assert_eq!(s.test_len(), 1);
    // Deterministic boundaries: record 8 is validation, record 9 is test.
    assert_eq!(s.val_x[0], vec![8]);
    assert_eq!(s.test_x[0], vec![9]);
}

#[test]
fn split_honors_floor_arithmetic() {
    for n in [3usize, 7, 10, 23, 100] {
        for frac in [0.5, 0.6, 0.8, 0.9] {
            let x: Vec<Vec<usize>> = (0..n).map(|i| vec![i]).collect();
            let y: Vec<u8> = vec![0; n];
            let s = split(x, y, frac).unwrap();
            let expected_train = ((n as f64) * frac).floor() as usize;
            let remaining = n - expected_train;
            assert_eq!(s.train_len(), expected_train, "n={n} frac={frac}");
            assert_eq!(s.val_len(), remaining / 2, "n={n} frac={frac}");
            assert_eq!(s.test_len(), remaining - remaining / 2, "n={n} frac={frac}");
            assert_eq!(s.train_len() + s.val_len() + s.test_len(), n);
        }
    }
}

#[test]
fn invalid_inputs_fail_fast() {
    assert!(matches!(
        pad_sequences(&[vec![1]], 0),
        Err(PipelineError::InvalidConfig(_))
    ));
    assert!(matches!(
        split(vec![vec![1]], vec![1], 1.5),
        Err(PipelineError::InvalidConfig(_))
    ));
    assert!(matches!(
        split(Vec::new(), Vec::new(), 0.8),
        Err(PipelineError::InvalidConfig(_))
    ));
}
