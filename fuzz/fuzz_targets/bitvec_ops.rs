#![no_main]
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use wdbits::{BitVector, RankConfig, RankedBitVector};

#[derive(Debug, Arbitrary)]
enum Op {
    Push(bool),
    Set(u16, bool),
}

fuzz_target!(|data: (u8, Vec<Op>)| {
    let (block_words, ops) = data;
    let block_bits = (usize::from(block_words % 8) + 1) * 64;
    let Ok(config) = RankConfig::new(block_bits) else {
        return;
    };

    let mut rv = RankedBitVector::with_config(config);
    let mut model: Vec<bool> = Vec::new();
    for op in &ops {
        match *op {
            Op::Push(b) => {
                rv.push(b);
                model.push(b);
            }
            Op::Set(i, b) => {
                let i = usize::from(i);
                rv.set(i, b);
                if i >= model.len() {
                    model.resize(i + 1, false);
                }
                model[i] = b;
            }
        }
    }

    assert_eq!(rv.len(), model.len());
    let mut expected = 0;
    for (i, &b) in model.iter().enumerate() {
        assert_eq!(rv.get(i), b);
        assert_eq!(rv.rank1(i), expected);
        if b {
            assert_eq!(rv.select1(expected), Some(i));
            expected += 1;
        }
    }
    assert_eq!(rv.rank1(model.len()), expected);
    assert_eq!(rv.select1(expected), None);

    let plain: BitVector = model.iter().copied().collect();
    assert_eq!(plain, rv);
    assert_eq!(plain.content_hash(), rv.as_bit_vector().content_hash());
});
