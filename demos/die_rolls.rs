use chi2fit::data::WeightMap;
use chi2fit::gof::chi_test;
use rand::distributions::{Distribution, WeightedIndex};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn main() {
    let mut rng = SmallRng::seed_from_u64(0x5eed);
    let faces: Vec<u8> = (1..=6).collect();
    let fair = WeightMap::uniform(faces.iter().copied());

    // Roll a die (1...6) that comes up 6 a third of the time
    let loaded = WeightedIndex::new([1.0, 1.0, 1.0, 1.0, 1.0, 2.5]).unwrap();

    for n in [10, 30, 100, 300, 1000] {
        let rolls: Vec<u8> =
            (0..n).map(|_| faces[loaded.sample(&mut rng)]).collect();
        let res = chi_test(&rolls, &fair).unwrap();
        match res.warning {
            Some(warning) => {
                println!("n = {:>4}: p = {:.5} ({})", n, res.p, warning)
            }
            None => println!("n = {:>4}: p = {:.5}", n, res.p),
        }
    }
}
