#![no_main]

use libfuzzer_sys::fuzz_target;

use chemlab_core::{
    compute, Acid, AcidBaseRequest, Base, ExperimentRequest, ExperimentResult, Solution,
};

fn field(data: &[u8], i: usize) -> f64 {
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&data[i * 8..i * 8 + 8]);
    f64::from_le_bytes(bytes)
}

fuzz_target!(|data: &[u8]| {
    if data.len() < 34 {
        return;
    }
    let request = AcidBaseRequest {
        acid: Acid::ALL[usize::from(data[32]) % Acid::ALL.len()],
        acid_molarity: field(data, 0),
        acid_volume: field(data, 1),
        base: Base::ALL[usize::from(data[33]) % Base::ALL.len()],
        base_molarity: field(data, 2),
        base_volume: field(data, 3),
    };
    let acid_eq = request.acid_equivalents();
    let base_eq = request.base_equivalents();

    let Ok(ExperimentResult::AcidBase(res)) = compute(&ExperimentRequest::from(request)) else {
        return;
    };

    // Should never be NaN, and the excess side decides the character.
    assert!(res.ph.is_finite());
    if acid_eq > base_eq {
        assert_ne!(res.result, Solution::Basic);
    } else if base_eq > acid_eq {
        assert_ne!(res.result, Solution::Acidic);
    }
});
