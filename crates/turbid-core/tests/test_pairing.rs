use turbid_core::io::pairing::{is_degraded_name, pair_images, ImagePair, PairingStrategy};

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

fn pair(original: &str, degraded: &str) -> ImagePair {
    ImagePair {
        original: original.to_string(),
        degraded: degraded.to_string(),
    }
}

#[test]
fn degraded_markers_are_case_insensitive() {
    assert!(is_degraded_name("moon_Degraded.bmp"));
    assert!(is_degraded_name("NOISE_1.png"));
    assert!(is_degraded_name("lena_blur.tif"));
    assert!(!is_degraded_name("moon.bmp"));
}

#[test]
fn pairs_by_name_when_groups_match() {
    let pairing = pair_images(&names(&[
        "moon_degraded.bmp",
        "lena.png",
        "moon.bmp",
        "lena_blur.png",
    ]));
    assert_eq!(pairing.strategy, PairingStrategy::ByName);
    assert_eq!(
        pairing.pairs,
        vec![
            pair("lena.png", "lena_blur.png"),
            pair("moon.bmp", "moon_degraded.bmp"),
        ]
    );
}

#[test]
fn falls_back_to_sorted_halves() {
    let pairing = pair_images(&names(&["d.png", "b.png", "a.png", "c.png"]));
    assert_eq!(pairing.strategy, PairingStrategy::ByOrder);
    assert_eq!(
        pairing.pairs,
        vec![pair("a.png", "c.png"), pair("b.png", "d.png")]
    );
}

#[test]
fn unequal_groups_use_order() {
    let pairing = pair_images(&names(&["a.png", "b.png", "a_noise.png"]));
    assert_eq!(pairing.strategy, PairingStrategy::ByOrder);
    assert_eq!(pairing.pairs, vec![pair("a.png", "a_noise.png")]);
}

#[test]
fn single_image_is_self_paired() {
    let pairing = pair_images(&names(&["moon.bmp"]));
    assert_eq!(pairing.strategy, PairingStrategy::SelfPaired);
    assert_eq!(pairing.pairs, vec![pair("moon.bmp", "moon.bmp")]);
}

#[test]
fn strategy_display() {
    assert_eq!(PairingStrategy::ByName.to_string(), "by filename");
    assert_eq!(PairingStrategy::ByOrder.to_string(), "by order");
    assert_eq!(PairingStrategy::SelfPaired.to_string(), "self-paired");
}
