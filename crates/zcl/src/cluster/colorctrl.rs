use crate::attr::AttributeDescriptor;
use crate::cluster::{attr, cmd, no_commands, ClusterDef, ClusterId, R, RP, RPS, RS, RW};
use crate::command::{payload, CommandDescriptor};
use crate::types::ZclDataType::{Bitmap16, CharStr, Enum8, Uint8, Uint16};

payload! {
    MoveToHue {
        hue: u8,
        direction: u8,
        transition_time: u16,
    }

    MoveHue {
        move_mode: u8,
        rate: u8,
    }

    StepHue {
        step_mode: u8,
        step_size: u8,
        transition_time: u8,
    }

    MoveToSaturation {
        saturation: u8,
        transition_time: u16,
    }

    MoveSaturation {
        move_mode: u8,
        rate: u8,
    }

    StepSaturation {
        step_mode: u8,
        step_size: u8,
        transition_time: u8,
    }

    MoveToHueAndSaturation {
        hue: u8,
        saturation: u8,
        transition_time: u16,
    }

    MoveToColor {
        color_x: u16,
        color_y: u16,
        transition_time: u16,
    }

    MoveColor {
        rate_x: i16,
        rate_y: i16,
    }

    StepColor {
        step_x: i16,
        step_y: i16,
        transition_time: u16,
    }

    MoveToColorTemperature {
        color_temperature_mireds: u16,
        transition_time: u16,
    }

    EnhancedMoveToHue {
        enhanced_hue: u16,
        direction: u8,
        transition_time: u16,
    }

    EnhancedMoveHue {
        move_mode: u8,
        rate: u16,
    }

    EnhancedStepHue {
        step_mode: u8,
        step_size: u16,
        transition_time: u16,
    }

    EnhancedMoveToHueAndSaturation {
        enhanced_hue: u16,
        saturation: u8,
        transition_time: u16,
    }

    /// Only the attributes selected by `update_flags` are applied
    ColorLoopSet {
        update_flags: u8,
        action: u8,
        direction: u8,
        time: u16,
        start_hue: u16,
    }

    StopMoveStep {}

    MoveColorTemperature {
        move_mode: u8,
        rate: u16,
        color_temperature_min_mireds: u16,
        color_temperature_max_mireds: u16,
    }

    StepColorTemperature {
        step_mode: u8,
        step_size: u16,
        transition_time: u16,
        color_temperature_min_mireds: u16,
        color_temperature_max_mireds: u16,
    }
}

const ATTRIBUTES: &[(u16, AttributeDescriptor)] = &[
    /* color information */
    (0x0000, attr("CurrentHue", Uint8, RP)),
    (0x0001, attr("CurrentSaturation", Uint8, RP)),
    (0x0002, attr("RemainingTime", Uint16, R)),
    (0x0003, attr("CurrentX", Uint16, RPS)),
    (0x0004, attr("CurrentY", Uint16, RPS)),
    (0x0005, attr("DriftCompensation", Enum8, R)),
    (0x0006, attr("CompensationText", CharStr, R)),
    (0x0007, attr("ColorTemperatureMireds", Uint16, RP)),
    (0x0008, attr("ColorMode", Enum8, R)),
    (0x4000, attr("EnhancedCurrentHue", Uint16, RS)),
    (0x4001, attr("EnhancedColorMode", Enum8, R)),
    (0x4002, attr("ColorLoopActive", Uint8, RS)),
    (0x4003, attr("ColorLoopDirection", Uint8, RS)),
    (0x4004, attr("ColorLoopTime", Uint16, RS)),
    (0x4005, attr("ColorLoopStartEnhancedHue", Uint16, R)),
    (0x4006, attr("ColorLoopStoredEnhancedHue", Uint16, R)),
    (0x400a, attr("ColorCapabilities", Bitmap16, R)),
    (0x400b, attr("ColorTempPhysicalMinMireds", Uint16, R)),
    (0x400c, attr("ColorTempPhysicalMaxMireds", Uint16, R)),
    /* defined primaries */
    (0x0010, attr("NumberOfPrimaries", Uint8, R)),
    (0x0011, attr("Primary1X", Uint16, R)),
    (0x0012, attr("Primary1Y", Uint16, R)),
    (0x0013, attr("Primary1Intensity", Uint8, R)),
    (0x0015, attr("Primary2X", Uint16, R)),
    (0x0016, attr("Primary2Y", Uint16, R)),
    (0x0017, attr("Primary2Intensity", Uint8, R)),
    (0x0019, attr("Primary3X", Uint16, R)),
    (0x001a, attr("Primary3Y", Uint16, R)),
    (0x001b, attr("Primary3Intensity", Uint8, R)),
    /* additional primaries */
    (0x0020, attr("Primary4X", Uint16, R)),
    (0x0021, attr("Primary4Y", Uint16, R)),
    (0x0022, attr("Primary4Intensity", Uint8, R)),
    (0x0024, attr("Primary5X", Uint16, R)),
    (0x0025, attr("Primary5Y", Uint16, R)),
    (0x0026, attr("Primary5Intensity", Uint8, R)),
    (0x0028, attr("Primary6X", Uint16, R)),
    (0x0029, attr("Primary6Y", Uint16, R)),
    (0x002a, attr("Primary6Intensity", Uint8, R)),
    /* color point settings */
    (0x0030, attr("WhitePointX", Uint16, RW)),
    (0x0031, attr("WhitePointY", Uint16, RW)),
    (0x0032, attr("ColorPointRX", Uint16, RW)),
    (0x0033, attr("ColorPointRY", Uint16, RW)),
    (0x0034, attr("ColorPointRIntensity", Uint8, RW)),
    (0x0036, attr("ColorPointGX", Uint16, RW)),
    (0x0037, attr("ColorPointGY", Uint16, RW)),
    (0x0038, attr("ColorPointGIntensity", Uint8, RW)),
    (0x003a, attr("ColorPointBX", Uint16, RW)),
    (0x003b, attr("ColorPointBY", Uint16, RW)),
    (0x003c, attr("ColorPointBIntensity", Uint8, RW)),
];

fn received() -> Vec<(u8, CommandDescriptor)> {
    vec![
        (0x00, cmd("MoveToHue", MoveToHue::default())),
        (0x01, cmd("MoveHue", MoveHue::default())),
        (0x02, cmd("StepHue", StepHue::default())),
        (0x03, cmd("MoveToSaturation", MoveToSaturation::default())),
        (0x04, cmd("MoveSaturation", MoveSaturation::default())),
        (0x05, cmd("StepSaturation", StepSaturation::default())),
        (0x06, cmd("MoveToHueAndSaturation", MoveToHueAndSaturation::default())),
        (0x07, cmd("MoveToColor", MoveToColor::default())),
        (0x08, cmd("MoveColor", MoveColor::default())),
        (0x09, cmd("StepColor", StepColor::default())),
        (0x0a, cmd("MoveToColorTemperature", MoveToColorTemperature::default())),
        (0x40, cmd("EnhancedMoveToHue", EnhancedMoveToHue::default())),
        (0x41, cmd("EnhancedMoveHue", EnhancedMoveHue::default())),
        (0x42, cmd("EnhancedStepHue", EnhancedStepHue::default())),
        (
            0x43,
            cmd(
                "EnhancedMoveToHueAndSaturation",
                EnhancedMoveToHueAndSaturation::default(),
            ),
        ),
        (0x44, cmd("ColorLoopSet", ColorLoopSet::default())),
        (0x47, cmd("StopMoveStep", StopMoveStep {})),
        (0x4b, cmd("MoveColorTemperature", MoveColorTemperature::default())),
        (0x4c, cmd("StepColorTemperature", StepColorTemperature::default())),
    ]
}

pub const COLOR_CONTROL: ClusterDef = ClusterDef {
    id: ClusterId::COLOR_CONTROL,
    name: "ColorControl",
    attributes: ATTRIBUTES,
    received,
    generated: no_commands,
};
