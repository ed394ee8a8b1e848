use std::error::Error;
use std::fs::{self, File};
use std::path::Path;

use log::{debug, warn};

/// A time/value series loaded from CSV.
#[derive(Debug, Clone, Default)]
pub struct Series {
    /// Time column (synthesized as 0, 1, 2, … if the file has none).
    pub t: Vec<f64>,
    /// Signal column.
    pub y: Vec<f64>,
}

/// Loads a CSV file with a header row, locating the time and value columns
/// by name. If the time column is absent, `t` is synthesized as the 0-based
/// row index. Fails if the file cannot be opened, the value column is
/// missing, or a value fails to parse.
pub fn load_series<P: AsRef<Path>>(
    path: P,
    tcol: &str,
    ycol: &str,
) -> Result<Series, Box<dyn Error>> {
    let path = path.as_ref();
    let file = File::open(path)
        .map_err(|e| format!("failed to open {}: {}", path.display(), e))?;
    let mut rdr = csv::Reader::from_reader(file);

    let headers = rdr.headers()?.clone();
    let yi = headers
        .iter()
        .position(|h| h.trim() == ycol)
        .ok_or_else(|| format!("value column '{}' not found in {}", ycol, path.display()))?;
    let ti = headers.iter().position(|h| h.trim() == tcol);
    if ti.is_none() {
        warn!(
            "time column '{}' not found in {}; synthesizing sample index",
            tcol,
            path.display()
        );
    }

    let mut series = Series::default();
    for (k, result) in rdr.records().enumerate() {
        let record = result?;

        let yval: f64 = record
            .get(yi)
            .ok_or_else(|| format!("row {} has no field {}", k, yi))?
            .trim()
            .parse()?;
        let tval = match ti.and_then(|i| record.get(i)) {
            Some(field) => field.trim().parse()?,
            None => k as f64,
        };

        series.t.push(tval);
        series.y.push(yval);
    }

    debug!("loaded {} rows from {}", series.y.len(), path.display());
    Ok(series)
}

/// Writes a 3-column CSV with a header row and fixed-precision values
/// (10 decimal places), creating parent directories as needed.
///
/// Fails if the three columns differ in length or the file cannot be
/// created.
pub fn write_series3<P: AsRef<Path>>(
    path: P,
    t: &[f64],
    y1: &[f64],
    y2: &[f64],
    h1: &str,
    h2: &str,
    h3: &str,
) -> Result<(), Box<dyn Error>> {
    if t.len() != y1.len() || t.len() != y2.len() {
        return Err(format!(
            "column length mismatch: {} / {} / {}",
            t.len(),
            y1.len(),
            y2.len()
        )
        .into());
    }

    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut wtr = csv::Writer::from_writer(File::create(path)?);
    wtr.write_record([h1, h2, h3])?;
    for i in 0..t.len() {
        wtr.write_record([
            format!("{:.10}", t[i]),
            format!("{:.10}", y1[i]),
            format!("{:.10}", y2[i]),
        ])?;
    }
    wtr.flush()?;

    debug!("wrote {} rows to {}", t.len(), path.display());
    Ok(())
}

/// Sample standard deviation (N−1 denominator). Returns 0.0 for fewer than
/// 2 samples.
pub fn std_dev(v: &[f64]) -> f64 {
    if v.len() < 2 {
        return 0.0;
    }
    let mean = v.iter().sum::<f64>() / v.len() as f64;
    let accum = v.iter().map(|x| (x - mean) * (x - mean)).sum::<f64>();
    (accum / (v.len() - 1) as f64).sqrt()
}
