use chart_window::{SampleSource, SlidingSampleWindow, WindowConfig};
use rand::Rng;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

const BARS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

fn sparkline(source: &dyn SampleSource<f64>) -> String {
    let normalized = source.normalized_samples();
    let unfilled = source.capacity() - source.sample_count();
    normalized
        .iter()
        .enumerate()
        .map(|(i, v)| {
            if i < unfilled {
                ' '
            } else {
                BARS[((v * (BARS.len() - 1) as f64).round() as usize).min(BARS.len() - 1)]
            }
        })
        .collect()
}

fn main() -> eyre::Result<()> {
    let config = WindowConfig::<f64>::from_json(r#"{"capacity": 40}"#)?;
    let mut window = SlidingSampleWindow::with_config(&config);

    let redraws = Arc::new(AtomicUsize::new(0));
    let r = redraws.clone();
    window.subscribe(move || {
        r.fetch_add(1, Ordering::Relaxed);
    });

    let mut rng = rand::rng();
    let mut price: f64 = 100.0;
    for tick in 0..60 {
        price += rng.random_range(-2.0..2.0);
        window.push(price);
        if tick % 10 == 9 {
            println!("{:>3} |{}|", tick + 1, sparkline(&window));
        }
    }

    window.resize(20);
    println!("resized |{}|", sparkline(&window));
    println!("redraw requests: {}", redraws.load(Ordering::Relaxed));
    Ok(())
}
