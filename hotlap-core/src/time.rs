// lap time display formatting, consumed by whatever front end shows the HUD

/// Format a lap time in milliseconds as "mm:ss.cc" (minutes, seconds,
/// centiseconds).
pub fn format_lap_time(ms: f64) -> String {
    let ms = ms.max(0.0);
    let minutes = (ms / 60_000.0).floor() as u64;
    let seconds = ((ms % 60_000.0) / 1000.0).floor() as u64;
    let centis = ((ms % 1000.0) / 10.0).floor() as u64;

    format!("{:02}:{:02}.{:02}", minutes, seconds, centis)
}
