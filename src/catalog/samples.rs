//! Element sets bundled for runs without a catalog source.

pub const ISS_ZARYA: &str = "ISS (ZARYA)
1 25544U 98067A   08264.51782528 -.00002182  00000-0 -11606-4 0  2927
2 25544  51.6416 247.4627 0006703 130.5360 325.0288 15.72125391563537";

pub const DRAGON_CRS2: &str = "DRAGON CRS-2
1 39115U 13010A   13062.62492353  .00008823  00000-0  14845-3 0   188
2 39115  51.6441 272.5899 0012056 334.2535  68.5574 15.52501943   306";

pub fn all() -> Vec<String> {
    vec![ISS_ZARYA.to_string(), DRAGON_CRS2.to_string()]
}
