//! Frame rendering logic.

use super::core::AetherApp;

/// True when `interval_secs` have passed since the last FPS report.
fn fps_report_due(elapsed: f64, last_report: f64, interval_secs: u32) -> bool {
    interval_secs > 0 && elapsed - last_report >= interval_secs as f64
}

impl AetherApp {
    /// Tick the clock, advance the scene, and draw it.
    pub(super) fn render_frame(&mut self) {
        let delta = self.clock.tick();
        let frame = self.scene.advance(delta);

        if let Some(ref mut rs) = self.render_state {
            if let Err(e) = rs.render(&frame) {
                tracing::error!("Render error: {e}");
            }
        }

        let elapsed = self.clock.elapsed();
        if fps_report_due(elapsed, self.last_fps_report, self.config.logging.fps_report_secs) {
            tracing::info!(
                "{:.1} fps ({:.2} ms/frame)",
                self.clock.fps(),
                self.clock.frame_time_ms()
            );
            self.last_fps_report = elapsed;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_interval_never_reports() {
        assert!(!fps_report_due(1000.0, 0.0, 0));
    }

    #[test]
    fn reports_after_interval() {
        assert!(!fps_report_due(4.9, 0.0, 5));
        assert!(fps_report_due(5.0, 0.0, 5));
        assert!(!fps_report_due(9.0, 5.0, 5));
    }
}
