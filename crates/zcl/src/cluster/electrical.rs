//! Electrical measurement. Attribute ids are grouped by their high byte.

use crate::attr::AttributeDescriptor;
use crate::cluster::{attr, cmd, ClusterDef, ClusterId, R, RW};
use crate::command::{payload, CommandDescriptor};
use crate::types::ZclDataType::{Bitmap8, Bitmap16, Bitmap32, Int8, Int16, Int32, Uint16, Uint32};

payload! {
    GetProfileInfo {}

    GetMeasurementProfile {
        attribute_id: u16,
        start_time: u32,
        number_of_intervals: u8,
    }

    GetProfileInfoResponse {
        profile_count: u8,
        profile_interval_period: u8,
        max_number_of_intervals: u8,
        attributes: Vec<u16>,
    }

    GetMeasurementProfileResponse {
        start_time: u32,
        status: u8,
        profile_interval_period: u8,
        number_of_intervals_delivered: u8,
        attribute_id: u16,
        intervals: Vec<u8>,
    }
}

const ATTRIBUTES: &[(u16, AttributeDescriptor)] = &[
    /* basic information */
    (0x0000, attr("MeasurementType", Bitmap32, R)),
    /* dc measurement */
    (0x0100, attr("DCVoltage", Int16, R)),
    (0x0101, attr("DCVoltageMin", Int16, R)),
    (0x0102, attr("DCVoltageMax", Int16, R)),
    (0x0103, attr("DCCurrent", Int16, R)),
    (0x0104, attr("DCCurrentMin", Int16, R)),
    (0x0105, attr("DCCurrentMax", Int16, R)),
    (0x0106, attr("DCPower", Int16, R)),
    (0x0107, attr("DCPowerMin", Int16, R)),
    (0x0108, attr("DCPowerMax", Int16, R)),
    /* dc formatting */
    (0x0200, attr("DCVoltageMultiplier", Uint16, R)),
    (0x0201, attr("DCVoltageDivisor", Uint16, R)),
    (0x0202, attr("DCCurrentMultiplier", Uint16, R)),
    (0x0203, attr("DCCurrentDivisor", Uint16, R)),
    (0x0204, attr("DCPowerMultiplier", Uint16, R)),
    (0x0205, attr("DCPowerDivisor", Uint16, R)),
    /* ac (non phase-specific) measurement */
    (0x0300, attr("ACFrequency", Uint16, R)),
    (0x0301, attr("ACFrequencyMin", Uint16, R)),
    (0x0302, attr("ACFrequencyMax", Uint16, R)),
    (0x0303, attr("NeutralCurrent", Uint16, R)),
    (0x0304, attr("TotalActivePower", Int32, R)),
    (0x0305, attr("TotalReactivePower", Int32, R)),
    (0x0306, attr("TotalApparentPower", Uint32, R)),
    (0x0307, attr("Measured1stHarmonicCurrent", Int16, R)),
    (0x0308, attr("Measured3rdHarmonicCurrent", Int16, R)),
    (0x0309, attr("Measured5thHarmonicCurrent", Int16, R)),
    (0x030a, attr("Measured7thHarmonicCurrent", Int16, R)),
    (0x030b, attr("Measured9thHarmonicCurrent", Int16, R)),
    (0x030c, attr("Measured11thHarmonicCurrent", Int16, R)),
    (0x030d, attr("MeasuredPhase1stHarmonicCurrent", Int16, R)),
    (0x030e, attr("MeasuredPhase3rdHarmonicCurrent", Int16, R)),
    (0x030f, attr("MeasuredPhase5thHarmonicCurrent", Int16, R)),
    (0x0310, attr("MeasuredPhase7thHarmonicCurrent", Int16, R)),
    (0x0311, attr("MeasuredPhase9thHarmonicCurrent", Int16, R)),
    (0x0312, attr("MeasuredPhase11thHarmonicCurrent", Int16, R)),
    /* ac (non phase-specific) formatting */
    (0x0400, attr("ACFrequencyMultiplier", Uint16, R)),
    (0x0401, attr("ACFrequencyDivisor", Uint16, R)),
    (0x0402, attr("PowerMultiplier", Uint32, R)),
    (0x0403, attr("PowerDivisor", Uint32, R)),
    (0x0404, attr("HarmonicCurrentMultiplier", Int8, R)),
    (0x0405, attr("PhaseHarmonicCurrentMultiplier", Int8, R)),
    /* ac (single phase or phase a) measurement */
    (0x0501, attr("LineCurrent", Uint16, R)),
    (0x0502, attr("ActiveCurrent", Int16, R)),
    (0x0503, attr("ReactiveCurrent", Int16, R)),
    (0x0505, attr("RMSVoltage", Uint16, R)),
    (0x0506, attr("RMSVoltageMin", Uint16, R)),
    (0x0507, attr("RMSVoltageMax", Uint16, R)),
    (0x0508, attr("RMSCurrent", Uint16, R)),
    (0x0509, attr("RMSCurrentMin", Uint16, R)),
    (0x050a, attr("RMSCurrentMax", Uint16, R)),
    (0x050b, attr("ActivePower", Int16, R)),
    (0x050c, attr("ActivePowerMin", Int16, R)),
    (0x050d, attr("ActivePowerMax", Int16, R)),
    (0x050e, attr("ReactivePower", Int16, R)),
    (0x050f, attr("ApparentPower", Uint16, R)),
    (0x0510, attr("PowerFactor", Int8, R)),
    (0x0511, attr("AverageRMSVoltageMeasurementPeriod", Uint16, RW)),
    (0x0512, attr("AverageRMSOverVoltageCounter", Uint16, RW)),
    (0x0513, attr("AverageRMSUnderVoltageCounter", Uint16, RW)),
    (0x0514, attr("RMSExtremeOverVoltagePeriod", Uint16, RW)),
    (0x0515, attr("RMSExtremeUnderVoltagePeriod", Uint16, RW)),
    (0x0516, attr("RMSVoltageSagPeriod", Uint16, RW)),
    (0x0517, attr("RMSVoltageSwellPeriod", Uint16, RW)),
    /* ac formatting */
    (0x0600, attr("ACVoltageMultiplier", Uint16, R)),
    (0x0601, attr("ACVoltageDivisor", Uint16, R)),
    (0x0602, attr("ACCurrentMultiplier", Uint16, R)),
    (0x0603, attr("ACCurrentDivisor", Uint16, R)),
    (0x0604, attr("ACPowerMultiplier", Uint16, R)),
    (0x0605, attr("ACPowerDivisor", Uint16, R)),
    /* dc manufacturer threshold alarms */
    (0x0700, attr("DCOverloadAlarmsMask", Bitmap8, RW)),
    (0x0701, attr("DCVoltageOverload", Int16, R)),
    (0x0702, attr("DCCurrentOverload", Int16, R)),
    /* ac manufacturer threshold alarms */
    (0x0800, attr("ACAlarmsMask", Bitmap16, RW)),
    (0x0801, attr("ACVoltageOverload", Int16, R)),
    (0x0802, attr("ACCurrentOverload", Int16, R)),
    (0x0803, attr("ACActivePowerOverload", Int16, R)),
    (0x0804, attr("ACReactivePowerOverload", Int16, R)),
    (0x0805, attr("AverageRMSOverVoltage", Int16, R)),
    (0x0806, attr("AverageRMSUnderVoltage", Int16, R)),
    (0x0807, attr("RMSExtremeOverVoltage", Int16, RW)),
    (0x0808, attr("RMSExtremeUnderVoltage", Int16, RW)),
    (0x0809, attr("RMSVoltageSag", Int16, RW)),
    (0x080a, attr("RMSVoltageSwell", Int16, RW)),
    /* ac phase b measurement */
    (0x0901, attr("LineCurrentPhB", Uint16, R)),
    (0x0902, attr("ActiveCurrentPhB", Int16, R)),
    (0x0903, attr("ReactiveCurrentPhB", Int16, R)),
    (0x0905, attr("RMSVoltagePhB", Uint16, R)),
    (0x0906, attr("RMSVoltageMinPhB", Uint16, R)),
    (0x0907, attr("RMSVoltageMaxPhB", Uint16, R)),
    (0x0908, attr("RMSCurrentPhB", Uint16, R)),
    (0x0909, attr("RMSCurrentMinPhB", Uint16, R)),
    (0x090a, attr("RMSCurrentMaxPhB", Uint16, R)),
    (0x090b, attr("ActivePowerPhB", Int16, R)),
    (0x090c, attr("ActivePowerMinPhB", Int16, R)),
    (0x090d, attr("ActivePowerMaxPhB", Int16, R)),
    (0x090e, attr("ReactivePowerPhB", Int16, R)),
    (0x090f, attr("ApparentPowerPhB", Uint16, R)),
    (0x0910, attr("PowerFactorPhB", Int8, R)),
    (0x0911, attr("AverageRMSVoltageMeasurementPeriodPhB", Uint16, RW)),
    (0x0912, attr("AverageRMSOverVoltageCounterPhB", Uint16, RW)),
    (0x0913, attr("AverageRMSUnderVoltageCounterPhB", Uint16, RW)),
    (0x0914, attr("RMSExtremeOverVoltagePeriodPhB", Uint16, RW)),
    (0x0915, attr("RMSExtremeUnderVoltagePeriodPhB", Uint16, RW)),
    (0x0916, attr("RMSVoltageSagPeriodPhB", Uint16, RW)),
    (0x0917, attr("RMSVoltageSwellPeriodPhB", Uint16, RW)),
    /* ac phase c measurement */
    (0x0a01, attr("LineCurrentPhC", Uint16, R)),
    (0x0a02, attr("ActiveCurrentPhC", Int16, R)),
    (0x0a03, attr("ReactiveCurrentPhC", Int16, R)),
    (0x0a05, attr("RMSVoltagePhC", Uint16, R)),
    (0x0a06, attr("RMSVoltageMinPhC", Uint16, R)),
    (0x0a07, attr("RMSVoltageMaxPhC", Uint16, R)),
    (0x0a08, attr("RMSCurrentPhC", Uint16, R)),
    (0x0a09, attr("RMSCurrentMinPhC", Uint16, R)),
    (0x0a0a, attr("RMSCurrentMaxPhC", Uint16, R)),
    (0x0a0b, attr("ActivePowerPhC", Int16, R)),
    (0x0a0c, attr("ActivePowerMinPhC", Int16, R)),
    (0x0a0d, attr("ActivePowerMaxPhC", Int16, R)),
    (0x0a0e, attr("ReactivePowerPhC", Int16, R)),
    (0x0a0f, attr("ApparentPowerPhC", Uint16, R)),
    (0x0a10, attr("PowerFactorPhC", Int8, R)),
    (0x0a11, attr("AverageRMSVoltageMeasurementPeriodPhC", Uint16, RW)),
    (0x0a12, attr("AverageRMSOverVoltageCounterPhC", Uint16, RW)),
    (0x0a13, attr("AverageRMSUnderVoltageCounterPhC", Uint16, RW)),
    (0x0a14, attr("RMSExtremeOverVoltagePeriodPhC", Uint16, RW)),
    (0x0a15, attr("RMSExtremeUnderVoltagePeriodPhC", Uint16, RW)),
    (0x0a16, attr("RMSVoltageSagPeriodPhC", Uint16, RW)),
    (0x0a17, attr("RMSVoltageSwellPeriodPhC", Uint16, RW)),
];

fn received() -> Vec<(u8, CommandDescriptor)> {
    vec![
        (0x00, cmd("GetProfileInfo", GetProfileInfo {})),
        (0x01, cmd("GetMeasurementProfile", GetMeasurementProfile::default())),
    ]
}

fn generated() -> Vec<(u8, CommandDescriptor)> {
    vec![
        (0x00, cmd("GetProfileInfoResponse", GetProfileInfoResponse::default())),
        (
            0x01,
            cmd(
                "GetMeasurementProfileResponse",
                GetMeasurementProfileResponse::default(),
            ),
        ),
    ]
}

pub const ELECTRICAL_MEASUREMENT: ClusterDef = ClusterDef {
    id: ClusterId::ELECTRICAL_MEASUREMENT,
    name: "ElectricalMeasurement",
    attributes: ATTRIBUTES,
    received,
    generated,
};

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use crate::cluster::electrical::ELECTRICAL_MEASUREMENT;

    #[test]
    fn no_reserved_placeholders() {
        let elec = ELECTRICAL_MEASUREMENT.build();
        for id in [0x0500, 0x0504, 0x0900, 0x0904, 0x0a00, 0x0a04] {
            assert!(elec.attribute(id).is_none(), "{id:04x}");
        }
    }

    #[test]
    fn names_are_unique() {
        let elec = ELECTRICAL_MEASUREMENT.build();
        let names: BTreeSet<&str> = elec.attributes.values().map(|a| a.name).collect();
        assert_eq!(names.len(), elec.attributes.len());
    }

    #[test]
    fn profile_requests_are_received() {
        let elec = ELECTRICAL_MEASUREMENT.build();
        assert_eq!(elec.received(0x00).unwrap().name, "GetProfileInfo");
        assert_eq!(
            elec.generated(0x01).unwrap().name,
            "GetMeasurementProfileResponse"
        );
    }
}
