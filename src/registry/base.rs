//! Command table shared by every T-series model.

use crate::protocol::OperatorSet;
use crate::registry::{ValueRange, Variable};

/// Variables common to all supported receivers, ordered by name.
pub const BASE: &[(&str, Variable)] = &[
    ("DSP.Version", Variable::read_only("Query DSP Version")),
    ("Ipod.Album", Variable::read_only("Get the current playing album name")),
    ("Ipod.Artist", Variable::read_only("Get the current playing track artist")),
    (
        "Ipod.AudiobookSpeed",
        Variable::enumerated("iPod Audiobook Speed", &["Normal", "Slow", "Fast"]),
    ),
    (
        "Ipod.AutoConnect",
        Variable::enumerated("AutoConnect to iPod when iPod source is selected", &["No", "Yes"]),
    ),
    ("Ipod.Enabled", Variable::enumerated("Enable/Disable the iPod interface", &["No", "Yes"])),
    (
        "Ipod.MenuTimeout",
        Variable::range(
            "Timeout before returning to iPod \"Now Playing\" screen",
            ValueRange::stepped(0, 60, 5),
        ),
    ),
    (
        "Ipod.PlayMode",
        Variable::enumerated("Set the iPod to Rewind", &["Pause", "Rewind", "FastForward", "Play"]),
    ),
    (
        "Ipod.Repeat",
        Variable::enumerated("Set the iPod to Repeat Off, One, or All", &["Off", "All", "One"]),
    ),
    (
        "Ipod.Shuffle",
        Variable::enumerated(
            "Set the iPod to Shuffle Off, Songs, or Albums. Note: must be set before selecting music.",
            &["Off", "Albums", "Songs"],
        ),
    ),
    ("Ipod.Title", Variable::read_only("Get the current playing track title")),
    ("Ipod.Track", Variable::free_form("Track Next/Previous").with_operators(OperatorSet::STEP)),
    (
        "Main.Amp.Back",
        Variable::enumerated(
            "Set the back Amplifier output to Zone3",
            &["Front", "Back", "Zone3", "Zone4", "Zone2"],
        ),
    ),
    (
        "Main.Audyssey",
        Variable::enumerated("Set the Audyssey Curve", &["Audyssey", "Off", "Flat", "NAD"]),
    ),
    (
        "Main.Audyssey.ADV",
        Variable::enumerated(
            "Audyssey Volume (Command Valid with AM200 Only)",
            &["Off", "Heavy", "Light", "Medium"],
        ),
    ),
    (
        "Main.Audyssey.DEQ",
        Variable::enumerated("Audyssey Dynamic EQ (Command Valid with AM200 Only)", &["Off", "On"]),
    ),
    (
        "Main.Audyssey.Offset",
        Variable::range(
            "Audyssey Dynamic EQ Offset (Command Valid with AM200 Only)",
            ValueRange::new(0, 15),
        ),
    ),
    (
        "Main.AutoTrigger",
        Variable::enumerated("Set Trigger Input", &["Zone3", "All", "Main", "Zone4", "Zone2"]),
    ),
    ("Main.Bass", Variable::range("Set the Bass Tone Control", ValueRange::stepped(-10, 10, 2))),
    (
        "Main.CEC.Arc",
        Variable::enumerated(
            "Enables selection of ARC in Source Setup OSD Menu",
            &["SourceSetup", "Off", "Auto"],
        ),
    ),
    ("Main.CEC.Audio", Variable::enumerated("Feature Disabled", &["Off", "On"])),
    (
        "Main.CEC.Power",
        Variable::enumerated(
            "Allows receiver to be turned on and off via CEC (TXX5 series only turns off)",
            &["Off", "On"],
        ),
    ),
    (
        "Main.CEC.Switch",
        Variable::enumerated("Allows CEC to change receiver's source", &["Off", "On"]),
    ),
    (
        "Main.CenterDialog",
        Variable::range("Set the CenterDialog Tone Control", ValueRange::stepped(-6, 6, 2)),
    ),
    (
        "Main.ControlStandby",
        Variable::enumerated("Allow Ethernet control when in standby", &["Off", "On"]),
    ),
    (
        "Main.DTS.CenterGain",
        Variable::enumerated("Set DTS Center Gain", &["0.5", "0.2", "0.3", "0.1", "0", "0.4"]),
    ),
    (
        "Main.DTS.DRC",
        Variable::range("Set DTS Dynamic Range Control", ValueRange::stepped(25, 100, 25)),
    ),
    ("Main.Dimmer", Variable::enumerated("Front VFD Dimmer", &["Off", "On"])),
    (
        "Main.Distance.BackLeft",
        Variable::range("Set the speaker distance in Feet", ValueRange::new(0, 30)),
    ),
    (
        "Main.Distance.BackRight",
        Variable::range("Set the speaker distance in Feet", ValueRange::new(0, 30)),
    ),
    (
        "Main.Distance.Center",
        Variable::range("Set the speaker distance in Feet", ValueRange::new(0, 30)),
    ),
    (
        "Main.Distance.Left",
        Variable::range("Set the speaker distance in Feet", ValueRange::new(0, 30)),
    ),
    (
        "Main.Distance.Right",
        Variable::range("Set the speaker distance in Feet", ValueRange::new(0, 30)),
    ),
    (
        "Main.Distance.Sub",
        Variable::range("Set the speaker distance in Feet", ValueRange::new(0, 30)),
    ),
    (
        "Main.Distance.SurroundLeft",
        Variable::range("Set the speaker distance in Feet", ValueRange::new(0, 30)),
    ),
    (
        "Main.Distance.SurroundRight",
        Variable::range("Set the speaker distance in Feet", ValueRange::new(0, 30)),
    ),
    ("Main.Distance.UOM", Variable::enumerated("Set the Unit of Measurement", &["Feet", "Meters"])),
    ("Main.Dolby.CenterWidth", Variable::range("Dolby Center Width", ValueRange::new(0, 7))),
    (
        "Main.Dolby.DRC",
        Variable::range(
            "Dolby Dynamic Range Control (100% is maximum dynamic range)",
            ValueRange::stepped(25, 100, 25),
        ),
    ),
    ("Main.Dolby.Dimension", Variable::range("Dolby Dimension", ValueRange::new(-7, 7))),
    ("Main.Dolby.Panorama", Variable::enumerated("Set Dolby Panorama", &["Off", "On"])),
    ("Main.EnhancedBass", Variable::enumerated("Set Enhanced Bass On/Off", &["Off", "On"])),
    (
        "Main.EnhancedStereo.Back",
        Variable::enumerated("Set Enhanced Stereo Speakers", &["Off", "On"]),
    ),
    (
        "Main.EnhancedStereo.Center",
        Variable::enumerated("Set Enhanced Stereo Speakers", &["Off", "On"]),
    ),
    (
        "Main.EnhancedStereo.Front",
        Variable::enumerated("Set Enhanced Stereo Speakers", &["Off", "On"]),
    ),
    (
        "Main.EnhancedStereo.Surround",
        Variable::enumerated("Set Enhanced Stereo Speakers", &["Off", "On"]),
    ),
    (
        "Main.IR",
        Variable::free_form("Send IR Commands via RS232 where <VALUE> is decimal IR code")
            .with_operators(OperatorSet::ASSIGN),
    ),
    (
        "Main.IR.Channel",
        Variable::range(
            "Set the Main IR Channel (allows for two NAD's to be controlled seperately)",
            ValueRange::new(0, 1),
        ),
    ),
    (
        "Main.IR1",
        Variable::free_form(
            "String showing the HEX value of a supported IR command (0x877C customer code)",
        )
        .with_operators(OperatorSet::ASSIGN),
    ),
    (
        "Main.IR2",
        Variable::free_form(
            "String showing the HEX value of a supported IR command (0x860F customer code)",
        )
        .with_operators(OperatorSet::ASSIGN),
    ),
    ("Main.Level.BackLeft", Variable::range("Set Speaker Level", ValueRange::new(-12, 12))),
    ("Main.Level.BackRight", Variable::range("Set Speaker Level", ValueRange::new(-12, 12))),
    ("Main.Level.Center", Variable::range("Set Speaker Level", ValueRange::new(-12, 12))),
    ("Main.Level.Left", Variable::range("Set Speaker Level", ValueRange::new(-12, 12))),
    ("Main.Level.Right", Variable::range("Set Speaker Level", ValueRange::new(-12, 12))),
    ("Main.Level.Sub", Variable::range("Set Speaker Level", ValueRange::new(-12, 12))),
    ("Main.Level.SurroundLeft", Variable::range("Set Speaker Level", ValueRange::new(-12, 12))),
    ("Main.Level.SurroundRight", Variable::range("Set Speaker Level", ValueRange::new(-12, 12))),
    ("Main.LipSyncDelay", Variable::range("Set Lip Sync Delay", ValueRange::new(0, 120))),
    (
        "Main.ListeningMode",
        Variable::enumerated(
            "Set Active Listening Mode",
            &[
                "EARS",
                "PLIIMusic",
                "NEO6Music",
                "PLIIMovie",
                "NEO6Cinema",
                "EnhancedStereo",
                "SurroundEX",
                "AnalogBypass",
                "None",
                "ProLogic",
                "StereoDownmix",
            ],
        ),
    ),
    (
        "Main.ListeningMode.Analog",
        Variable::enumerated(
            "Set default Analog Signal Listening Mode",
            &[
                "EARS",
                "PLIIMusic",
                "NEO6Music",
                "PLIIMovie",
                "NEO6Cinema",
                "EnhancedStereo",
                "AnalogBypass",
                "None",
                "ProLogic",
            ],
        ),
    ),
    (
        "Main.ListeningMode.DTS",
        Variable::enumerated(
            "Set default DTS Listening Mode",
            &["NEO6Music", "None", "StereoDownmix"],
        ),
    ),
    (
        "Main.ListeningMode.Digital",
        Variable::enumerated(
            "Set default Digital Signal Listening Mode",
            &[
                "EARS",
                "NEO6Music",
                "PLIIMusic",
                "PLIIMovie",
                "NEO6Cinema",
                "EnhancedStereo",
                "None",
                "ProLogic",
                "StereoDownmix",
            ],
        ),
    ),
    (
        "Main.ListeningMode.DolbyDigital",
        Variable::enumerated(
            "Set default Dolby Digital Listening Mode",
            &["PLIIMusic", "PLIIMovie", "SurroundEX", "None", "StereoDownmix"],
        ),
    ),
    (
        "Main.ListeningMode.DolbyDigital2ch",
        Variable::enumerated(
            "Set default Dolby Digital 2 channel Listening Mode",
            &["PLIIMusic", "ProLogic", "PLIIMovie", "None"],
        ),
    ),
    ("Main.Model", Variable::read_only("Query AVR Model")),
    ("Main.Mute", Variable::enumerated("Set Mute", &["Off", "On"])),
    ("Main.OSD.TempDisplay", Variable::enumerated("Set OSD Temp Display On/Off", &["Off", "On"])),
    ("Main.Power", Variable::enumerated("Turn the Main Power On/Off", &["Off", "On"])),
    ("Main.Sleep", Variable::range("Set Time before Sleep", ValueRange::new(0, 90))),
    ("Main.Source", Variable::range("Set Main Source", ValueRange::new(1, 10))),
    (
        "Main.Speaker.Back.Config1",
        Variable::range("Set Back Speakers to Off, One, or Two speakers", ValueRange::new(0, 2)),
    ),
    ("Main.Speaker.Back.Config2", Variable::enumerated("Set Speaker Size", &["Small", "Large"])),
    (
        "Main.Speaker.Back.Frequency",
        Variable::range("Set Speaker Crossover", ValueRange::stepped(40, 200, 10)),
    ),
    (
        "Main.Speaker.Center.Config",
        Variable::enumerated("Set Speaker Size or Turn Speaker Off", &["Off", "Small", "Large"]),
    ),
    (
        "Main.Speaker.Center.Frequency",
        Variable::range("Set Speaker Crossover", ValueRange::stepped(40, 200, 10)),
    ),
    ("Main.Speaker.Front.Config", Variable::enumerated("Set Speaker Size", &["Small", "Large"])),
    (
        "Main.Speaker.Front.Frequency",
        Variable::range("Set Speaker Crossover", ValueRange::stepped(40, 200, 10)),
    ),
    ("Main.Speaker.Sub", Variable::enumerated("Set Subwoofer On/Off", &["Off", "On"])),
    (
        "Main.Speaker.Surround.Config",
        Variable::enumerated("Set Speaker Size or Turn Speaker Off", &["Off", "Small", "Large"]),
    ),
    (
        "Main.Speaker.Surround.Frequency",
        Variable::range("Set Speaker Crossover", ValueRange::stepped(40, 200, 10)),
    ),
    ("Main.ToneDefeat", Variable::enumerated("Set Tone Defeat On/Off", &["Off", "On"])),
    ("Main.Treble", Variable::range("Set Treble Tone Control", ValueRange::stepped(-10, 10, 2))),
    ("Main.Trigger1.Delay", Variable::range("Set Trigger 1 Delay", ValueRange::new(0, 15))),
    (
        "Main.Trigger1.Out",
        Variable::enumerated(
            "Set Trigger 1",
            &["Zone234", "Zone3", "Main", "Zone4", "Source", "Zone2"],
        ),
    ),
    ("Main.Trigger2.Delay", Variable::range("Set Trigger 2 Delay", ValueRange::new(0, 15))),
    (
        "Main.Trigger2.Out",
        Variable::enumerated(
            "Set Trigger 2",
            &["Zone234", "Zone3", "Main", "Zone4", "Source", "Zone2"],
        ),
    ),
    ("Main.Trigger3.Delay", Variable::range("Set Trigger 3 Delay", ValueRange::new(0, 15))),
    (
        "Main.Trigger3.Out",
        Variable::enumerated(
            "Set Trigger 3",
            &["Zone234", "Zone3", "Main", "Zone4", "Source", "Zone2"],
        ),
    ),
    (
        "Main.Trim.Center",
        Variable::range(
            "Set Trim Level (Not saved when receiver power is cycled)",
            ValueRange::new(-6, 6),
        ),
    ),
    (
        "Main.Trim.Sub",
        Variable::range(
            "Set Trim Level (Not saved when receiver power is cycled)",
            ValueRange::new(-6, 6),
        ),
    ),
    (
        "Main.Trim.Surround",
        Variable::range(
            "Set Trim Level (Not saved when receiver power is cycled)",
            ValueRange::new(-6, 6),
        ),
    ),
    ("Main.VFD.Display", Variable::enumerated("Set VFD Display Temp/On", &["On", "Temp"])),
    (
        "Main.VFD.Line1",
        Variable::enumerated(
            "Set VFD Line 1 Item",
            &[
                "Volume",
                "Off",
                "AudioSourceFormat",
                "Zone2Source",
                "Zone4Source",
                "ListeningMode",
                "MainSource",
                "Zone3Source",
            ],
        ),
    ),
    (
        "Main.VFD.Line2",
        Variable::enumerated(
            "Set VFD Line 2 Item",
            &[
                "Volume",
                "Off",
                "AudioSourceFormat",
                "Zone2Source",
                "MainSource",
                "ListeningMode",
                "Zone4Source",
                "Zone3Source",
            ],
        ),
    ),
    ("Main.VFD.TempLine", Variable::range("Set VFD Time Line to 1 or 2", ValueRange::new(1, 2))),
    ("Main.Version", Variable::read_only("Query Main MCU Version")),
    (
        "Main.Video.Aspect.Mode",
        Variable::enumerated(
            "Zome the video output (Command Valid with VM200 Only)",
            &["Stretch", "LetterBox", "Zoom"],
        ),
    ),
    (
        "Main.Video.Aspect.Ratio",
        Variable::enumerated("(Command Valid with VM200 Only)", &["4:3", "16:9"]),
    ),
    (
        "Main.Video.Brightness",
        Variable::range("Brightness (Command Valid with VM200 Only)", ValueRange::new(0, 100)),
    ),
    (
        "Main.Video.Contrast",
        Variable::range("Contrast (Command Valid with VM200 Only)", ValueRange::new(0, 100)),
    ),
    (
        "Main.Video.EdgeEnhancement.Level",
        Variable::range("Edge Enhacement (Command Valid with VM200 Only)", ValueRange::new(0, 100)),
    ),
    (
        "Main.Video.EdgeEnhancement.Treshold",
        Variable::range("Edge Enhacement (Command Valid with VM200 Only)", ValueRange::new(0, 100)),
    ),
    (
        "Main.Video.NoiseReduction",
        Variable::range("Noise Reduction (Command Valid with VM200 Only)", ValueRange::new(0, 50)),
    ),
    ("Main.Video.Rate", Variable::enumerated("(Command Valid with VM200 Only)", &["60", "50"])),
    (
        "Main.Video.Resolution",
        Variable::enumerated(
            "Video Resolution (Command Valid with VM200 Only)",
            &["480i", "576i", "576p", "480p", "720p", "1080p", "1080i"],
        ),
    ),
    ("Main.VideoMode", Variable::enumerated("Set Main Video Mode", &["NTSC", "PAL"])),
    (
        "Main.Volume",
        Variable::range(
            "Set Main Volume (range depends on levels, trims, etc)",
            ValueRange::new(-99, 19),
        ),
    ),
    (
        "Preset1.Setup.DSPOptions",
        Variable::enumerated("Set Preset to include DSP Options", &["No", "Yes"]),
    ),
    (
        "Preset1.Setup.ListeningMode",
        Variable::enumerated("Set Preset to include Listening Mode Options", &["No", "Yes"]),
    ),
    (
        "Preset1.Setup.PictureControls",
        Variable::enumerated("(Command Valid with VM200 Only)", &["No", "Yes"]),
    ),
    (
        "Preset1.Setup.Speaker",
        Variable::enumerated("Set Preset to not include Speaker Settings", &["No", "Yes"]),
    ),
    (
        "Preset2.Setup.Display",
        Variable::enumerated("Set Preset to not include Display settings", &["No", "Yes"]),
    ),
    (
        "Preset2.Setup.PictureControls",
        Variable::enumerated("(Command Valid with VM200 Only)", &["No", "Yes"]),
    ),
    (
        "Preset3.Setup.Display",
        Variable::enumerated("Set Preset to not include Display settings", &["No", "Yes"]),
    ),
    (
        "Preset3.Setup.PictureControls",
        Variable::enumerated("(Command Valid with VM200 Only)", &["No", "Yes"]),
    ),
    (
        "Preset3.Setup.Speaker",
        Variable::enumerated("Set Preset to not include Speaker Settings", &["No", "Yes"]),
    ),
    (
        "Preset4.Setup.DSPOptions",
        Variable::enumerated("Set Preset to not include DSP Options", &["No", "Yes"]),
    ),
    (
        "Preset4.Setup.ListeningMode",
        Variable::enumerated("Set Preset to not include Listening Mode Options", &["No", "Yes"]),
    ),
    (
        "Preset4.Setup.PictureControls",
        Variable::enumerated("(Command Valid with VM200 Only)", &["No", "Yes"]),
    ),
    (
        "Preset5.Setup.DSPOptions",
        Variable::enumerated("Set Preset to not include DSP Options", &["No", "Yes"]),
    ),
    (
        "Preset5.Setup.Display",
        Variable::enumerated("Set Preset to not include Display settings", &["No", "Yes"]),
    ),
    (
        "Preset5.Setup.ListeningMode",
        Variable::enumerated("Set Preset to not include Listening Mode Options", &["No", "Yes"]),
    ),
    (
        "Preset5.Setup.PictureControls",
        Variable::enumerated("(Command Valid with VM200 Only)", &["No", "Yes"]),
    ),
    (
        "Preset5.Setup.Speaker",
        Variable::enumerated("Set Preset to not include Speaker Settings", &["No", "Yes"]),
    ),
    (
        "Preset5.Setup.ToneControls",
        Variable::enumerated("Set Preset to not include Tone Control Settings", &["No", "Yes"]),
    ),
    (
        "Source1.AnalogAudioFormat",
        Variable::enumerated("Set Analog Audio Format", &["Off", "7.1", "Stereo"]),
    ),
    ("Source1.AnalogAudioInput", Variable::range("Set Analog Audio Input", ValueRange::new(1, 8))),
    (
        "Source1.AnalogGain",
        Variable::range("Set Analog Audio Gain", ValueRange::stepped(-12, 12, 3)),
    ),
    (
        "Source1.DigitalAudioFormat",
        Variable::enumerated(
            "Set source's digital audio to HDMI's audio return channel (ARC)",
            &["Coaxial", "Off", "HDMI", "Optical", "ARC"],
        ),
    ),
    (
        "Source1.DigitalAudioInput",
        Variable::range("Set Digital Audio Input", ValueRange::new(1, 8)),
    ),
    ("Source1.Enabled", Variable::enumerated("Set Source Enabled No/Yes", &["No", "Yes"])),
    ("Source1.Preset", Variable::range("Set Source Preset", ValueRange::new(0, 5))),
    ("Source1.TriggerOut", Variable::range("Set Source Trigger Out", ValueRange::new(0, 7))),
    (
        "Source1.VideoFormat",
        Variable::enumerated(
            "Set Source Video Format",
            &["Component", "Off", "Video", "HDMI", "SVideo"],
        ),
    ),
    ("Source1.VideoInput", Variable::range("Set Source Video Input", ValueRange::new(1, 8))),
    ("Source10.AnalogAudioFormat", Variable::enumerated("Set Analog Audio Format", &["Stereo"])),
    (
        "Source10.AnalogAudioInput",
        Variable::range("Set Analog Audio Format", ValueRange::new(9, 9)),
    ),
    (
        "Source10.AnalogGain",
        Variable::range("Set Analog Audio Format", ValueRange::stepped(-12, 12, 3)),
    ),
    (
        "Source10.DigitalAudioInput",
        Variable::range("Set Digital Audio Input", ValueRange::new(1, 8)),
    ),
    ("Source10.Enabled", Variable::enumerated("Set Enabled Yes", &["Yes"])),
    ("Source10.Preset", Variable::range("Set Source Preset", ValueRange::new(0, 5))),
    ("Source10.TriggerOut", Variable::range("Set Source Trigger Out", ValueRange::new(0, 7))),
    (
        "Source10.VideoFormat",
        Variable::enumerated("Set Video Format", &["Component", "Off", "Video", "HDMI", "SVideo"]),
    ),
    ("Source10.VideoInput", Variable::range("Set Video Input", ValueRange::new(1, 8))),
    (
        "Source2.AnalogAudioFormat",
        Variable::enumerated("Set Analog Audio Format", &["7.1", "Off", "Stereo"]),
    ),
    ("Source2.AnalogAudioInput", Variable::range("Set Analog Audio Input", ValueRange::new(1, 8))),
    (
        "Source2.AnalogGain",
        Variable::range("Set Analog Audio Gain", ValueRange::stepped(-12, 12, 3)),
    ),
    (
        "Source2.DigitalAudioInput",
        Variable::range("Set Digital Audio Input", ValueRange::new(1, 8)),
    ),
    ("Source2.Enabled", Variable::enumerated("Set Source Enabled No/Yes", &["No", "Yes"])),
    ("Source2.Preset", Variable::range("Set Source Preset", ValueRange::new(0, 5))),
    ("Source2.TriggerOut", Variable::range("Set Source Trigger Out", ValueRange::new(0, 7))),
    (
        "Source2.VideoFormat",
        Variable::enumerated(
            "Set Source Video Format",
            &["Component", "Off", "Video", "HDMI", "SVideo"],
        ),
    ),
    ("Source2.VideoInput", Variable::range("Set Source Video Input", ValueRange::new(1, 8))),
    (
        "Source3.AnalogAudioFormat",
        Variable::enumerated("Set Analog Audio Format", &["Off", "7.1", "Stereo"]),
    ),
    ("Source3.AnalogAudioInput", Variable::range("Set Analog Audio Input", ValueRange::new(1, 8))),
    (
        "Source3.AnalogGain",
        Variable::range("Set Analog Audio Gain", ValueRange::stepped(-12, 12, 3)),
    ),
    (
        "Source3.DigitalAudioInput",
        Variable::range("Set Digital Audio Input", ValueRange::new(1, 8)),
    ),
    ("Source3.Enabled", Variable::enumerated("Set Source Enabled No/Yes", &["No", "Yes"])),
    ("Source3.Preset", Variable::range("Set Source Preset", ValueRange::new(0, 5))),
    ("Source3.TriggerOut", Variable::range("Set Source Trigger Out", ValueRange::new(0, 7))),
    (
        "Source3.VideoFormat",
        Variable::enumerated(
            "Set Source Video Format",
            &["Component", "Off", "Video", "HDMI", "SVideo"],
        ),
    ),
    ("Source3.VideoInput", Variable::range("Set Source Video Input", ValueRange::new(1, 8))),
    (
        "Source4.AnalogAudioFormat",
        Variable::enumerated("Set Analog Audio Format", &["7.1", "Off", "Stereo"]),
    ),
    ("Source4.AnalogAudioInput", Variable::range("Set Analog Audio Input", ValueRange::new(1, 8))),
    (
        "Source4.AnalogGain",
        Variable::range("Set Analog Audio Gain", ValueRange::stepped(-12, 12, 3)),
    ),
    (
        "Source4.DigitalAudioInput",
        Variable::range("Set Digital Audio Input", ValueRange::new(1, 8)),
    ),
    ("Source4.Enabled", Variable::enumerated("Set Source Enabled No/Yes", &["No", "Yes"])),
    ("Source4.Preset", Variable::range("Set Source Preset", ValueRange::new(0, 5))),
    ("Source4.TriggerOut", Variable::range("Set Source Trigger Out", ValueRange::new(0, 7))),
    (
        "Source4.VideoFormat",
        Variable::enumerated(
            "Set Source Video Format",
            &["Component", "Off", "Video", "HDMI", "SVideo"],
        ),
    ),
    ("Source4.VideoInput", Variable::range("Set Source Video Input", ValueRange::new(1, 8))),
    (
        "Source5.AnalogAudioFormat",
        Variable::enumerated("Set Analog Audio Format", &["Off", "7.1", "Stereo"]),
    ),
    ("Source5.AnalogAudioInput", Variable::range("Set Analog Audio Input", ValueRange::new(1, 8))),
    (
        "Source5.AnalogGain",
        Variable::range("Set Analog Audio Gain", ValueRange::stepped(-12, 12, 3)),
    ),
    (
        "Source5.DigitalAudioFormat",
        Variable::enumerated(
            "Set Digital Audio Format",
            &["Coaxial", "Off", "HDMI", "Optical", "ARC"],
        ),
    ),
    (
        "Source5.DigitalAudioInput",
        Variable::range("Set Digital Audio Input", ValueRange::new(1, 8)),
    ),
    ("Source5.Enabled", Variable::enumerated("Set Source Enabled No/Yes", &["No", "Yes"])),
    ("Source5.Preset", Variable::range("Set Source Preset", ValueRange::new(0, 5))),
    ("Source5.TriggerOut", Variable::range("Set Source Trigger Out", ValueRange::new(0, 7))),
    (
        "Source5.VideoFormat",
        Variable::enumerated(
            "Set Source Video Format",
            &["Component", "Off", "Video", "HDMI", "SVideo"],
        ),
    ),
    ("Source5.VideoInput", Variable::range("Set Source Video Input", ValueRange::new(1, 8))),
    (
        "Source6.AnalogAudioFormat",
        Variable::enumerated("Set Analog Audio Format", &["Off", "7.1", "Stereo"]),
    ),
    ("Source6.AnalogAudioInput", Variable::range("Set Analog Audio Input", ValueRange::new(1, 8))),
    (
        "Source6.AnalogGain",
        Variable::range("Set Analog Audio Gain", ValueRange::stepped(-12, 12, 3)),
    ),
    (
        "Source6.DigitalAudioInput",
        Variable::range("Set Digital Audio Input", ValueRange::new(1, 8)),
    ),
    ("Source6.Enabled", Variable::enumerated("Set Source Enabled No/Yes", &["No", "Yes"])),
    ("Source6.Preset", Variable::range("Set Source Preset", ValueRange::new(0, 5))),
    ("Source6.TriggerOut", Variable::range("Set Source Trigger Out", ValueRange::new(0, 7))),
    (
        "Source6.VideoFormat",
        Variable::enumerated(
            "Set Source Video Format",
            &["Component", "Off", "Video", "HDMI", "SVideo"],
        ),
    ),
    ("Source6.VideoInput", Variable::range("Set Source Video Input", ValueRange::new(1, 8))),
    (
        "Source7.AnalogAudioFormat",
        Variable::enumerated("Set Analog Audio Format", &["Off", "7.1", "Stereo"]),
    ),
    ("Source7.AnalogAudioInput", Variable::range("Set Analog Audio Input", ValueRange::new(1, 8))),
    (
        "Source7.AnalogGain",
        Variable::range("Set Analog Audio Gain", ValueRange::stepped(-12, 12, 3)),
    ),
    (
        "Source7.DigitalAudioFormat",
        Variable::enumerated(
            "Set source's digital audio to HDMI's audio return channel (ARC)",
            &["Coaxial", "Off", "HDMI", "Optical", "ARC"],
        ),
    ),
    (
        "Source7.DigitalAudioInput",
        Variable::range("Set Digital Audio Input", ValueRange::new(1, 8)),
    ),
    ("Source7.Enabled", Variable::enumerated("Set Source Enabled No/Yes", &["No", "Yes"])),
    ("Source7.Preset", Variable::range("Set Source Preset", ValueRange::new(0, 5))),
    ("Source7.TriggerOut", Variable::range("Set Source Trigger Out", ValueRange::new(0, 7))),
    (
        "Source7.VideoFormat",
        Variable::enumerated(
            "Set Source Video Format",
            &["Component", "Off", "Video", "HDMI", "SVideo"],
        ),
    ),
    ("Source7.VideoInput", Variable::range("Set Source Video Input", ValueRange::new(1, 8))),
    (
        "Source8.AnalogAudioFormat",
        Variable::enumerated("Set Analog Audio Format", &["Off", "7.1", "Stereo"]),
    ),
    ("Source8.AnalogAudioInput", Variable::range("Set Analog Audio Input", ValueRange::new(1, 8))),
    (
        "Source8.AnalogGain",
        Variable::range("Set Analog Audio Gain", ValueRange::stepped(-12, 12, 3)),
    ),
    (
        "Source8.DigitalAudioFormat",
        Variable::enumerated(
            "Set Digital Audio Format",
            &["Coaxial", "Off", "HDMI", "Optical", "ARC"],
        ),
    ),
    (
        "Source8.DigitalAudioInput",
        Variable::range("Set Digital Audio Input", ValueRange::new(1, 8)),
    ),
    ("Source8.Enabled", Variable::enumerated("Set Source Enabled No/Yes", &["No", "Yes"])),
    ("Source8.Preset", Variable::range("Set Source Preset", ValueRange::new(0, 5))),
    ("Source8.TriggerOut", Variable::range("Set Source Trigger Out", ValueRange::new(0, 7))),
    (
        "Source8.VideoFormat",
        Variable::enumerated(
            "Set Source Video Format",
            &["Component", "Off", "Video", "HDMI", "SVideo"],
        ),
    ),
    ("Source8.VideoInput", Variable::range("Set Source Video Input", ValueRange::new(1, 8))),
    (
        "Source9.AnalogAudioFormat",
        Variable::enumerated("Set Analog Audio Format", &["7.1", "Off", "Stereo"]),
    ),
    ("Source9.AnalogAudioInput", Variable::range("Set Analog Audio Input", ValueRange::new(1, 8))),
    (
        "Source9.AnalogGain",
        Variable::range("Set Analog Audio Gain", ValueRange::stepped(-12, 12, 3)),
    ),
    (
        "Source9.DigitalAudioFormat",
        Variable::enumerated(
            "Set Digital Audio Format",
            &["Coaxial", "Off", "HDMI", "Optical", "ARC"],
        ),
    ),
    (
        "Source9.DigitalAudioInput",
        Variable::range("Set Digital Audio Input", ValueRange::new(1, 8)),
    ),
    ("Source9.Enabled", Variable::enumerated("Set Source Enabled No/Yes", &["No", "Yes"])),
    ("Source9.Preset", Variable::range("Set Source Preset", ValueRange::new(0, 5))),
    ("Source9.TriggerOut", Variable::range("Set Source Trigger Out", ValueRange::new(0, 7))),
    (
        "Source9.VideoFormat",
        Variable::enumerated(
            "Set Source Video Format",
            &["Component", "Off", "Video", "HDMI", "SVideo"],
        ),
    ),
    ("Source9.VideoInput", Variable::range("Set Source Video Input", ValueRange::new(1, 8))),
    ("Tuner.AM.Frequency", Variable::free_form("AM Frequency String (ie. \"680\")")),
    ("Tuner.AMStep", Variable::range("Set Tuner AM Step Value", ValueRange::new(9, 10))),
    ("Tuner.Band", Variable::enumerated("Set Tuner Band", &["FM", "DAB", "AM", "XM"])),
    ("Tuner.DAB.DLS", Variable::read_only("DAB DLS Text")),
    ("Tuner.DAB.Service", Variable::read_only("DAB Service Name")),
    ("Tuner.DigitalMode", Variable::enumerated("Set Digital Mode (C Version)", &["DAB", "XM"])),
    ("Tuner.FM.Frequency", Variable::free_form("FM Frequency String (ie. \"102.1\")")),
    ("Tuner.FM.Mute", Variable::enumerated("Set Tuner FM Mute On/Off", &["Off", "On"])),
    ("Tuner.FM.RDSName", Variable::read_only("FM RDS Name")),
    ("Tuner.FM.RDSText", Variable::read_only("FM RDS Text")),
    ("Tuner.Preset", Variable::range("Set Tuner Preset", ValueRange::new(1, 40))),
    ("Tuner.XM.Channel", Variable::range("XM Channel Number", ValueRange::new(0, 255))),
    ("Tuner.XM.ChannelName", Variable::read_only("XM Channel Name")),
    ("Tuner.XM.Name", Variable::read_only("XM Song name")),
    ("Tuner.XM.Title", Variable::read_only("XM Song Title")),
    ("UART.Version", Variable::read_only("Query UART Version")),
    ("Zone2.Mute", Variable::enumerated("Set Zone Mute", &["Off", "On"])),
    ("Zone2.Power", Variable::enumerated("Set Zone Power", &["Off", "On"])),
    ("Zone2.Source", Variable::range("Set Zone Source", ValueRange::new(1, 11))),
    ("Zone2.Volume", Variable::range("Set Zone Volume", ValueRange::new(-99, 19))),
    (
        "Zone2.VolumeControl",
        Variable::enumerated("Set Zone Volume Control Variable/Fixed", &["Fixed", "Variable"]),
    ),
    ("Zone2.VolumeFixed", Variable::range("Set Zone Fixed Volume Value", ValueRange::new(-95, 16))),
    ("Zone3.Mode", Variable::enumerated("Set Zone Mode Zone/Record", &["Record", "Zone"])),
    ("Zone3.Mute", Variable::enumerated("Set Zone Mute", &["Off", "On"])),
    ("Zone3.Power", Variable::enumerated("Set Zone Power", &["Off", "On"])),
    ("Zone3.Source", Variable::range("Set Zone Source", ValueRange::new(1, 11))),
    ("Zone3.Volume", Variable::range("Set Zone Volume", ValueRange::new(-99, 19))),
    (
        "Zone3.VolumeControl",
        Variable::enumerated("Set Zone Volume Control Variable/Fixed", &["Fixed", "Variable"]),
    ),
    ("Zone3.VolumeFixed", Variable::range("Set Zone Fixed Volume", ValueRange::new(-95, 16))),
    ("Zone4.Mode", Variable::enumerated("Set Zone Mode Zone/Record", &["Record", "Zone"])),
    ("Zone4.Mute", Variable::enumerated("Set Zone Mute", &["Off", "On"])),
    ("Zone4.Power", Variable::enumerated("Set Zone Power", &["Off", "On"])),
    ("Zone4.Source", Variable::range("Set Zone Source", ValueRange::new(1, 11))),
    ("Zone4.Volume", Variable::range("Set Zone Volume", ValueRange::new(-99, 19))),
    (
        "Zone4.VolumeControl",
        Variable::enumerated("Set Zone Volume Control Variable/Fixed", &["Fixed", "Variable"]),
    ),
    ("Zone4.VolumeFixed", Variable::range("Set Zone Fixed Volume", ValueRange::new(-95, 16))),
];
