use phrase_align::{align, AlignConfig, CandidateOrder, Phrase};

fn corpus(count: usize, salt: usize) -> Vec<Phrase> {
    const WORDS: [&str; 10] = [
        "stone", "river", "light", "tower", "field", "storm", "cloud", "ember", "frost", "grove",
    ];
    (0..count)
        .map(|i| {
            let words: Vec<&str> = (0..2 + (i + salt) % 3)
                .map(|w| WORDS[(i * 3 + w * 7 + salt) % WORDS.len()])
                .collect();
            Phrase::new(words.join(" "))
        })
        .collect()
}

#[test]
fn repeated_runs_yield_identical_alignments() {
    let first = corpus(12, 1);
    let second = corpus(17, 4);
    let cfg = AlignConfig::default();

    let baseline = align(&first, &second, &cfg).expect("baseline");
    for _ in 0..5 {
        assert_eq!(align(&first, &second, &cfg).expect("rerun"), baseline);
    }
}

#[test]
fn parallel_matrix_does_not_change_the_result() {
    let first = corpus(20, 2);
    let second = corpus(25, 5);

    for order in [CandidateOrder::CheapestFirst, CandidateOrder::CostliestFirst] {
        let seq_cfg = AlignConfig::default().with_order(order);
        let par_cfg = AlignConfig::default().with_order(order).with_parallel(true);

        let seq = align(&first, &second, &seq_cfg).expect("sequential");
        let par = align(&first, &second, &par_cfg).expect("parallel");
        assert_eq!(seq, par);
    }
}

#[test]
fn identical_rows_still_take_distinct_partners() {
    let first: Vec<Phrase> = (0..4).map(|_| Phrase::new("same words")).collect();
    let second = corpus(6, 0);

    let out = align(&first, &second, &AlignConfig::default()).expect("align");
    assert_eq!(out.pairs.len(), 4);
    assert_eq!(out.unmatched.len(), 2);

    // Paired and unmatched phrases together are exactly the second set.
    let mut seen: Vec<&str> = out
        .pairs
        .iter()
        .map(|p| p.second.as_str())
        .chain(out.unmatched.iter().map(|u| u.phrase.as_str()))
        .collect();
    let mut expected: Vec<&str> = second.iter().map(Phrase::text).collect();
    seen.sort_unstable();
    expected.sort_unstable();
    assert_eq!(seen, expected);
}
