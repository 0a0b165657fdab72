//! Per-model command tables.
//!
//! Each model starts from [`BASE`](super::base::BASE) and inserts or replaces
//! the entries listed here.

use crate::registry::Variable;

/// Entries specific to the T777.
pub const T777_OVERRIDES: &[(&str, Variable)] = &[
    ("Main.SpeakerA", Variable::enumerated("Set Speaker A On/Off", &["Off", "On"])),
    ("Main.SpeakerB", Variable::enumerated("Set Speaker B On/Off", &["Off", "On"])),
    (
        "Preset1.Setup.Display",
        Variable::enumerated("Set Preset to include Display settings", &["No", "Yes"]),
    ),
    (
        "Preset1.Setup.ToneControls",
        Variable::enumerated("Set Preset to not include Tone Control Settings", &["No", "Yes"]),
    ),
    (
        "Preset2.Setup.DSPOptions",
        Variable::enumerated("Set Preset to include DSP Options", &["No", "Yes"]),
    ),
    (
        "Preset2.Setup.ListeningMode",
        Variable::enumerated("Set Preset to not include Listening Mode Options", &["No", "Yes"]),
    ),
    (
        "Preset2.Setup.Speaker",
        Variable::enumerated("Set Preset to include Speaker Settings", &["No", "Yes"]),
    ),
    (
        "Preset2.Setup.ToneControls",
        Variable::enumerated("Set Preset to not include Tone Control Settings", &["No", "Yes"]),
    ),
    (
        "Preset3.Setup.DSPOptions",
        Variable::enumerated("Set Preset to include DSP Options", &["No", "Yes"]),
    ),
    (
        "Preset3.Setup.ListeningMode",
        Variable::enumerated("Set Preset to not include Listening Mode Options", &["No", "Yes"]),
    ),
    (
        "Preset3.Setup.ToneControls",
        Variable::enumerated("Set Preset to not include Tone Control Settings", &["No", "Yes"]),
    ),
    (
        "Preset4.Setup.Display",
        Variable::enumerated("Set Preset to include Display settings", &["No", "Yes"]),
    ),
    (
        "Preset4.Setup.Speaker",
        Variable::enumerated("Set Preset to include Speaker Settings", &["No", "Yes"]),
    ),
    (
        "Preset4.Setup.ToneControls",
        Variable::enumerated("Set Preset to not include Tone Control Settings", &["No", "Yes"]),
    ),
    (
        "Source10.DigitalAudioFormat",
        Variable::enumerated(
            "Set source's digital audio to HDMI's audio return channel (ARC)",
            &["Coaxial", "Off", "HDMI", "Optical", "ARC"],
        ),
    ),
    (
        "Source2.DigitalAudioFormat",
        Variable::enumerated(
            "Set source's digital audio to HDMI's audio return channel (ARC)",
            &["Coaxial", "Off", "HDMI", "Optical", "ARC"],
        ),
    ),
    (
        "Source3.DigitalAudioFormat",
        Variable::enumerated(
            "Set Digital Audio Format",
            &["Coaxial", "Off", "HDMI", "Optical", "ARC"],
        ),
    ),
    (
        "Source4.DigitalAudioFormat",
        Variable::enumerated(
            "Set Digital Audio Format",
            &["Coaxial", "Off", "HDMI", "Optical", "ARC"],
        ),
    ),
    (
        "Source6.DigitalAudioFormat",
        Variable::enumerated(
            "Set source's digital audio to HDMI's audio return channel (ARC)",
            &["Coaxial", "Off", "HDMI", "Optical", "ARC"],
        ),
    ),
];

/// Entries specific to the T787.
pub const T787_OVERRIDES: &[(&str, Variable)] = &[
    ("Main.SpeakerA", Variable::enumerated("Set Speaker A On/Off", &["Off", "On"])),
    ("Main.SpeakerB", Variable::enumerated("Set Speaker B On/Off", &["Off", "On"])),
    (
        "Preset1.Setup.Display",
        Variable::enumerated("Set Preset to include Display settings", &["No", "Yes"]),
    ),
    (
        "Preset1.Setup.ToneControls",
        Variable::enumerated("Set Preset to not include Tone Control Settings", &["No", "Yes"]),
    ),
    (
        "Preset2.Setup.DSPOptions",
        Variable::enumerated("Set Preset to include DSP Options", &["No", "Yes"]),
    ),
    (
        "Preset2.Setup.ListeningMode",
        Variable::enumerated("Set Preset to not include Listening Mode Options", &["No", "Yes"]),
    ),
    (
        "Preset2.Setup.Speaker",
        Variable::enumerated("Set Preset to include Speaker Settings", &["No", "Yes"]),
    ),
    (
        "Preset2.Setup.ToneControls",
        Variable::enumerated("Set Preset to not include Tone Control Settings", &["No", "Yes"]),
    ),
    (
        "Preset3.Setup.DSPOptions",
        Variable::enumerated("Set Preset to include DSP Options", &["No", "Yes"]),
    ),
    (
        "Preset3.Setup.ListeningMode",
        Variable::enumerated("Set Preset to not include Listening Mode Options", &["No", "Yes"]),
    ),
    (
        "Preset3.Setup.ToneControls",
        Variable::enumerated("Set Preset to not include Tone Control Settings", &["No", "Yes"]),
    ),
    (
        "Preset4.Setup.Display",
        Variable::enumerated("Set Preset to include Display settings", &["No", "Yes"]),
    ),
    (
        "Preset4.Setup.Speaker",
        Variable::enumerated("Set Preset to include Speaker Settings", &["No", "Yes"]),
    ),
    (
        "Preset4.Setup.ToneControls",
        Variable::enumerated("Set Preset to not include Tone Control Settings", &["No", "Yes"]),
    ),
    (
        "Source10.DigitalAudioFormat",
        Variable::enumerated(
            "Set source's digital audio to HDMI's audio return channel (ARC)",
            &["Coaxial", "Off", "HDMI", "Optical", "ARC"],
        ),
    ),
    (
        "Source2.DigitalAudioFormat",
        Variable::enumerated(
            "Set source's digital audio to HDMI's audio return channel (ARC)",
            &["Coaxial", "Off", "HDMI", "Optical", "ARC"],
        ),
    ),
    (
        "Source3.DigitalAudioFormat",
        Variable::enumerated(
            "Set Digital Audio Format",
            &["Coaxial", "Off", "HDMI", "Optical", "ARC"],
        ),
    ),
    (
        "Source4.DigitalAudioFormat",
        Variable::enumerated(
            "Set Digital Audio Format",
            &["Coaxial", "Off", "HDMI", "Optical", "ARC"],
        ),
    ),
    (
        "Source6.DigitalAudioFormat",
        Variable::enumerated(
            "Set source's digital audio to HDMI's audio return channel (ARC)",
            &["Coaxial", "Off", "HDMI", "Optical", "ARC"],
        ),
    ),
];

/// Entries specific to the T187.
pub const T187_OVERRIDES: &[(&str, Variable)] = &[
    (
        "Preset1.Setup.Display",
        Variable::enumerated("Set Preset to not include Display settings", &["No", "Yes"]),
    ),
    (
        "Preset1.Setup.ToneControls",
        Variable::enumerated("Set Preset to include Tone Control Settings", &["No", "Yes"]),
    ),
    (
        "Preset2.Setup.DSPOptions",
        Variable::enumerated("Set Preset to not include DSP Options", &["No", "Yes"]),
    ),
    (
        "Preset2.Setup.ListeningMode",
        Variable::enumerated("Set Preset to include Listening Mode Options", &["No", "Yes"]),
    ),
    (
        "Preset2.Setup.Speaker",
        Variable::enumerated("Set Preset to not include Speaker Settings", &["No", "Yes"]),
    ),
    (
        "Preset2.Setup.ToneControls",
        Variable::enumerated("Set Preset to include Tone Control Settings", &["No", "Yes"]),
    ),
    (
        "Preset3.Setup.DSPOptions",
        Variable::enumerated("Set Preset to not include DSP Options", &["No", "Yes"]),
    ),
    (
        "Preset3.Setup.ListeningMode",
        Variable::enumerated("Set Preset to include Listening Mode Options", &["No", "Yes"]),
    ),
    (
        "Preset3.Setup.ToneControls",
        Variable::enumerated("Set Preset to include Tone Control Settings", &["No", "Yes"]),
    ),
    (
        "Preset4.Setup.Display",
        Variable::enumerated("Set Preset to not include Display settings", &["No", "Yes"]),
    ),
    (
        "Preset4.Setup.Speaker",
        Variable::enumerated("Set Preset to not include Speaker Settings", &["No", "Yes"]),
    ),
    (
        "Preset4.Setup.ToneControls",
        Variable::enumerated("Set Preset to include Tone Control Settings", &["No", "Yes"]),
    ),
    (
        "Source10.DigitalAudioFormat",
        Variable::enumerated(
            "Set Digital Audio Format",
            &["Coaxial", "Off", "HDMI", "Optical", "ARC"],
        ),
    ),
    (
        "Source2.DigitalAudioFormat",
        Variable::enumerated(
            "Set Digital Audio Format",
            &["Coaxial", "Off", "HDMI", "Optical", "ARC"],
        ),
    ),
    (
        "Source3.DigitalAudioFormat",
        Variable::enumerated(
            "Set source's digital audio to HDMI's audio return channel (ARC)",
            &["Coaxial", "Off", "HDMI", "Optical", "ARC"],
        ),
    ),
    (
        "Source4.DigitalAudioFormat",
        Variable::enumerated(
            "Set source's digital audio to HDMI's audio return channel (ARC)",
            &["Coaxial", "Off", "HDMI", "Optical", "ARC"],
        ),
    ),
    (
        "Source6.DigitalAudioFormat",
        Variable::enumerated(
            "Set Digital Audio Format",
            &["Coaxial", "Off", "HDMI", "Optical", "ARC"],
        ),
    ),
];
