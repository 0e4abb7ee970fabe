//! Writes a deterministic sample `spacex_launch_dash.csv` so the dashboard
//! can be exercised without a real launch-records file.

use anyhow::{Context, Result};

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    /// Uniform float in [0, 1).
    fn unit(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[(self.next_u64() % items.len() as u64) as usize]
    }
}

const SITES: &[&str] = &["CCAFS LC-40", "CCAFS SLC-40", "KSC LC-39A", "VAFB SLC-4E"];
const BOOSTER_VERSIONS: &[&str] = &["v1.0", "v1.1", "FT", "B4", "B5"];

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(20100604);
    let path = "spacex_launch_dash.csv";

    let mut writer = csv::Writer::from_path(path).context("creating sample CSV")?;
    writer.write_record([
        "Flight Number",
        "Launch Site",
        "class",
        "Payload Mass (kg)",
        "Booster Version Category",
    ])?;

    for flight in 1..=56u32 {
        let site = *rng.pick(SITES);
        let booster = *rng.pick(BOOSTER_VERSIONS);
        // Payloads cluster below 7000 kg with an occasional heavy launch.
        let payload = if rng.unit() < 0.85 {
            rng.unit() * 7000.0
        } else {
            7000.0 + rng.unit() * 3000.0
        };
        // Newer booster categories land more reliably.
        let success_rate = match booster {
            "v1.0" => 0.0,
            "v1.1" => 0.15,
            "FT" => 0.65,
            "B4" => 0.7,
            _ => 0.85,
        };
        let class = if rng.unit() < success_rate { 1 } else { 0 };

        writer.write_record([
            flight.to_string(),
            site.to_string(),
            class.to_string(),
            format!("{payload:.1}"),
            booster.to_string(),
        ])?;
    }

    writer.flush().context("writing sample CSV")?;
    println!("Wrote 56 sample launch records to {path}");
    Ok(())
}
