use std::sync::Arc;

use arrow::array::{Float64Array, Int64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;

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

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Uniform value in [low, high).
    fn range(&mut self, low: f64, high: f64) -> f64 {
        low + self.next_f64() * (high - low)
    }
}

struct GeneratedLaunch {
    flight_number: i64,
    site: String,
    payload_mass_kg: f64,
    class: i64,
    booster_category: String,
}

fn main() {
    let mut rng = SimpleRng::new(42);

    let sites = ["CCAFS LC-40", "CCAFS SLC-40", "KSC LC-39A", "VAFB SLC-4E"];

    // Booster category, typical payload band (kg), success probability.
    // Later variants fly heavier payloads and land more reliably.
    let boosters: [(&str, f64, f64, f64); 5] = [
        ("v1.0", 300.0, 700.0, 0.0),
        ("v1.1", 500.0, 4000.0, 0.25),
        ("FT", 1000.0, 9600.0, 0.65),
        ("B4", 2000.0, 9600.0, 0.55),
        ("B5", 2500.0, 9600.0, 0.9),
    ];
    let flights_per_booster = [4, 12, 20, 10, 10];

    let mut launches: Vec<GeneratedLaunch> = Vec::new();
    let mut flight_number: i64 = 1;

    for ((booster, lo, hi, p_success), &n) in boosters.iter().zip(flights_per_booster.iter()) {
        for _ in 0..n {
            let site = sites[(rng.next_u64() % sites.len() as u64) as usize];
            let payload_mass_kg = rng.range(*lo, *hi).round();
            let class = if rng.next_f64() < *p_success { 1 } else { 0 };

            launches.push(GeneratedLaunch {
                flight_number,
                site: site.to_string(),
                payload_mass_kg,
                class,
                booster_category: booster.to_string(),
            });
            flight_number += 1;
        }
    }

    write_csv(&launches, "launch_records.csv");
    write_parquet(&launches, "launch_records.parquet");

    println!(
        "Wrote {} launches to launch_records.csv and launch_records.parquet",
        launches.len()
    );
}

fn write_csv(launches: &[GeneratedLaunch], path: &str) {
    let mut writer = csv::Writer::from_path(path).expect("Failed to create CSV file");
    writer
        .write_record([
            "Flight Number",
            "Launch Site",
            "Payload Mass (kg)",
            "class",
            "Booster Version Category",
        ])
        .expect("Failed to write CSV header");

    for launch in launches {
        writer
            .write_record([
                launch.flight_number.to_string(),
                launch.site.clone(),
                format!("{:.1}", launch.payload_mass_kg),
                launch.class.to_string(),
                launch.booster_category.clone(),
            ])
            .expect("Failed to write CSV row");
    }
    writer.flush().expect("Failed to flush CSV");
}

fn write_parquet(launches: &[GeneratedLaunch], path: &str) {
    let flight_array = Int64Array::from(
        launches.iter().map(|l| l.flight_number).collect::<Vec<_>>(),
    );
    let site_array = StringArray::from(
        launches.iter().map(|l| l.site.as_str()).collect::<Vec<_>>(),
    );
    let payload_array = Float64Array::from(
        launches.iter().map(|l| l.payload_mass_kg).collect::<Vec<_>>(),
    );
    let class_array = Int64Array::from(launches.iter().map(|l| l.class).collect::<Vec<_>>());
    let booster_array = StringArray::from(
        launches
            .iter()
            .map(|l| l.booster_category.as_str())
            .collect::<Vec<_>>(),
    );

    let schema = Arc::new(Schema::new(vec![
        Field::new("Flight Number", DataType::Int64, false),
        Field::new("Launch Site", DataType::Utf8, false),
        Field::new("Payload Mass (kg)", DataType::Float64, false),
        Field::new("class", DataType::Int64, false),
        Field::new("Booster Version Category", DataType::Utf8, false),
    ]));

    let batch = RecordBatch::try_new(
        schema.clone(),
        vec![
            Arc::new(flight_array),
            Arc::new(site_array),
            Arc::new(payload_array),
            Arc::new(class_array),
            Arc::new(booster_array),
        ],
    )
    .expect("Failed to create RecordBatch");

    let file = std::fs::File::create(path).expect("Failed to create output file");
    let mut writer = ArrowWriter::try_new(file, schema, None).expect("Failed to create writer");
    writer.write(&batch).expect("Failed to write batch");
    writer.close().expect("Failed to close writer");
}
