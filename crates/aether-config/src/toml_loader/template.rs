//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub fn default_config_toml() -> String {
    r##"# Aether Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

# seed = 42              # fixed RNG seed for reproducible clouds

[window]
# title = "Aether"
# width = 1280           # 320-7680
# height = 800           # 240-4320
# startup_mode = "windowed"  # windowed, maximized, fullscreen
# background = "#000000"

[camera]
# fov_degrees = 75.0     # 10-170
# near = 0.1
# far = 1000.0
# distance = 50.0
# fog_density = 0.001    # 0.0-1.0

[stars]
# count = 4000           # 1-200000
# color = "#a5b4fc"      # used when the palette is empty
# point_size = 0.5
# opacity = 0.8          # 0.0-1.0
# tilt = [0.0, 0.0, 0.0] # radians

# [stars.shape]
# kind = "volume"        # volume, shell, cube
# radius = 400.0         # volume
# inner_radius = 1.2     # shell
# outer_radius = 2.7     # shell
# half_extent = 25.0     # cube

# [[stars.palette]]      # first entry whose threshold < draw wins
# threshold = 0.9
# color = "#ffffff"

[stars.motion]
# spin = [0.03, 0.06, 0.0]      # rad/s per axis
# pointer_coupling = 0.5        # 0 disables parallax
# easing = 0.01                 # 0.0-1.0 per frame
# breathing_amplitude = 0.05    # 0.0-0.5
# breathing_frequency = 0.5     # rad/s

[dust]
# enabled = true
# count = 100            # 1-10000
# half_extent = 25.0
# color = "#6366f1"
# point_size = 0.2
# opacity = 0.6
# spin = [-0.06, -0.12, 0.0]

[shooting_star]
# enabled = false
# period = 10.0
# start = [5.0, 2.0, 0.0]
# end = [-5.0, -2.0, 0.0]
# speed_min = 1.0
# speed_max = 3.0
# max_offset = 100.0
# size = 0.02
# color = "#ffffff"

[pointer]
# scale = 0.001

[waitlist]
# delivery = "csv"       # csv, relay

[waitlist.relay]
# url = "https://formsubmit.co/ajax/<inbox>"
# subject_prefix = "AETHER WAITLIST"
# template = "table"
# captcha = false
# timeout_secs = 15      # 1-120

[waitlist.csv]
# directory = "."
# simulated_latency_ms = 1500   # 0-10000

[logging]
# level = "info"         # trace, debug, info, warn, error
# fps_report_secs = 0
"##
    .to_string()
}
