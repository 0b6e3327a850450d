use std::collections::BTreeMap;
use std::fmt::Debug;

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::cluster::CommandDirection;
use crate::cluster::{alarms, basic, colorctrl, electrical, groups, ias, identify};
use crate::cluster::{levelctrl, onoff, ota, pollctrl, scenes};
use crate::foundation;
use crate::hexkey;

/// One parameter of a command payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Field {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub ty: &'static str,
}

/// Record type describing the parameters of one command.
///
/// Every implementor is also a variant of [`CommandPayload`].
pub trait Payload: Debug + Clone + Default + Into<CommandPayload> {
    const NAME: &'static str;
    const FIELDS: &'static [Field];
}

/// Declares payload record types and their [`Payload`] reflection data.
macro_rules! payload {
    ($(
        $(#[$outer:meta])*
        $name:ident {
            $($(#[$inner:meta])* $field:ident : $ty:ty),* $(,)?
        }
    )*) => {
        $(
            $(#[$outer])*
            #[derive(Debug, Clone, Default, PartialEq, Eq)]
            pub struct $name {
                $($(#[$inner])* pub $field: $ty,)*
            }

            impl $crate::command::Payload for $name {
                const NAME: &'static str = stringify!($name);
                const FIELDS: &'static [$crate::command::Field] = &[
                    $($crate::command::Field {
                        name: stringify!($field),
                        ty: stringify!($ty),
                    },)*
                ];
            }
        )*
    };
}

pub(crate) use payload;

macro_rules! command_payloads {
    ($($variant:ident($ty:ty)),* $(,)?) => {
        /// Parameter shape of a command, one variant per known payload type.
        ///
        /// The registry stores default values only. The variant identifies
        /// the shape, field values are for the codec to fill.
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub enum CommandPayload {
            $($variant($ty),)*
        }

        impl CommandPayload {
            #[must_use]
            pub const fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant(_) => <$ty as Payload>::NAME,)*
                }
            }

            #[must_use]
            pub const fn fields(&self) -> &'static [Field] {
                match self {
                    $(Self::$variant(_) => <$ty as Payload>::FIELDS,)*
                }
            }
        }

        $(
            impl From<$ty> for CommandPayload {
                fn from(value: $ty) -> Self {
                    Self::$variant(value)
                }
            }
        )*
    };
}

command_payloads! {
    /* foundation */
    ReadAttributes(foundation::ReadAttributes),
    ReadAttributesResponse(foundation::ReadAttributesResponse),
    WriteAttributes(foundation::WriteAttributes),
    WriteAttributesUndivided(foundation::WriteAttributesUndivided),
    WriteAttributesResponse(foundation::WriteAttributesResponse),
    WriteAttributesNoResponse(foundation::WriteAttributesNoResponse),
    ConfigureReporting(foundation::ConfigureReporting),
    ConfigureReportingResponse(foundation::ConfigureReportingResponse),
    ReadReportingConfiguration(foundation::ReadReportingConfiguration),
    ReadReportingConfigurationResponse(foundation::ReadReportingConfigurationResponse),
    ReportAttributes(foundation::ReportAttributes),
    DefaultResponse(foundation::DefaultResponse),
    DiscoverAttributes(foundation::DiscoverAttributes),
    DiscoverAttributesResponse(foundation::DiscoverAttributesResponse),
    ReadAttributesStructured(foundation::ReadAttributesStructured),
    WriteAttributesStructured(foundation::WriteAttributesStructured),
    WriteAttributesStructuredResponse(foundation::WriteAttributesStructuredResponse),
    DiscoverCommandsReceived(foundation::DiscoverCommandsReceived),
    DiscoverCommandsReceivedResponse(foundation::DiscoverCommandsReceivedResponse),
    DiscoverCommandsGenerated(foundation::DiscoverCommandsGenerated),
    DiscoverCommandsGeneratedResponse(foundation::DiscoverCommandsGeneratedResponse),
    DiscoverAttributesExtended(foundation::DiscoverAttributesExtended),
    DiscoverAttributesExtendedResponse(foundation::DiscoverAttributesExtendedResponse),

    /* basic */
    ResetToFactoryDefaults(basic::ResetToFactoryDefaults),

    /* identify */
    Identify(identify::Identify),
    IdentifyQuery(identify::IdentifyQuery),
    TriggerEffect(identify::TriggerEffect),
    IdentifyQueryResponse(identify::IdentifyQueryResponse),

    /* groups */
    AddGroup(groups::AddGroup),
    ViewGroup(groups::ViewGroup),
    GetGroupMembership(groups::GetGroupMembership),
    RemoveGroup(groups::RemoveGroup),
    RemoveAllGroups(groups::RemoveAllGroups),
    AddGroupIfIdentifying(groups::AddGroupIfIdentifying),
    AddGroupResponse(groups::AddGroupResponse),
    ViewGroupResponse(groups::ViewGroupResponse),
    GetGroupMembershipResponse(groups::GetGroupMembershipResponse),
    RemoveGroupResponse(groups::RemoveGroupResponse),

    /* scenes */
    AddScene(scenes::AddScene),
    ViewScene(scenes::ViewScene),
    RemoveScene(scenes::RemoveScene),
    RemoveAllScenes(scenes::RemoveAllScenes),
    StoreScene(scenes::StoreScene),
    RecallScene(scenes::RecallScene),
    GetSceneMembership(scenes::GetSceneMembership),
    EnhancedAddScene(scenes::EnhancedAddScene),
    EnhancedViewScene(scenes::EnhancedViewScene),
    CopyScene(scenes::CopyScene),
    AddSceneResponse(scenes::AddSceneResponse),
    ViewSceneResponse(scenes::ViewSceneResponse),
    RemoveSceneResponse(scenes::RemoveSceneResponse),
    RemoveAllScenesResponse(scenes::RemoveAllScenesResponse),
    StoreSceneResponse(scenes::StoreSceneResponse),
    GetSceneMembershipResponse(scenes::GetSceneMembershipResponse),
    EnhancedAddSceneResponse(scenes::EnhancedAddSceneResponse),
    EnhancedViewSceneResponse(scenes::EnhancedViewSceneResponse),
    CopySceneResponse(scenes::CopySceneResponse),

    /* on/off */
    Off(onoff::Off),
    On(onoff::On),
    Toggle(onoff::Toggle),
    OffWithEffect(onoff::OffWithEffect),
    OnWithRecallGlobalScene(onoff::OnWithRecallGlobalScene),
    OnWithTimedOff(onoff::OnWithTimedOff),

    /* level control */
    MoveToLevel(levelctrl::MoveToLevel),
    Move(levelctrl::Move),
    Step(levelctrl::Step),
    Stop(levelctrl::Stop),
    MoveToLevelWithOnOff(levelctrl::MoveToLevelWithOnOff),
    MoveWithOnOff(levelctrl::MoveWithOnOff),
    StepWithOnOff(levelctrl::StepWithOnOff),
    StopWithOnOff(levelctrl::StopWithOnOff),

    /* alarms */
    ResetAlarm(alarms::ResetAlarm),
    ResetAllAlarms(alarms::ResetAllAlarms),
    GetAlarm(alarms::GetAlarm),
    ResetAlarmLog(alarms::ResetAlarmLog),
    Alarm(alarms::Alarm),
    GetAlarmResponse(alarms::GetAlarmResponse),

    /* ota upgrade */
    ImageNotify(ota::ImageNotify),
    QueryNextImageRequest(ota::QueryNextImageRequest),
    QueryNextImageResponse(ota::QueryNextImageResponse),
    ImageBlockRequest(ota::ImageBlockRequest),
    ImagePageRequest(ota::ImagePageRequest),
    ImageBlockResponse(ota::ImageBlockResponse),
    UpgradeEndRequest(ota::UpgradeEndRequest),
    UpgradeEndResponse(ota::UpgradeEndResponse),
    QueryDeviceSpecificFileRequest(ota::QueryDeviceSpecificFileRequest),
    QueryDeviceSpecificFileResponse(ota::QueryDeviceSpecificFileResponse),

    /* poll control */
    CheckIn(pollctrl::CheckIn),
    CheckInResponse(pollctrl::CheckInResponse),
    FastPollStop(pollctrl::FastPollStop),
    SetLongPollInterval(pollctrl::SetLongPollInterval),
    SetShortPollInterval(pollctrl::SetShortPollInterval),

    /* color control */
    MoveToHue(colorctrl::MoveToHue),
    MoveHue(colorctrl::MoveHue),
    StepHue(colorctrl::StepHue),
    MoveToSaturation(colorctrl::MoveToSaturation),
    MoveSaturation(colorctrl::MoveSaturation),
    StepSaturation(colorctrl::StepSaturation),
    MoveToHueAndSaturation(colorctrl::MoveToHueAndSaturation),
    MoveToColor(colorctrl::MoveToColor),
    MoveColor(colorctrl::MoveColor),
    StepColor(colorctrl::StepColor),
    MoveToColorTemperature(colorctrl::MoveToColorTemperature),
    EnhancedMoveToHue(colorctrl::EnhancedMoveToHue),
    EnhancedMoveHue(colorctrl::EnhancedMoveHue),
    EnhancedStepHue(colorctrl::EnhancedStepHue),
    EnhancedMoveToHueAndSaturation(colorctrl::EnhancedMoveToHueAndSaturation),
    ColorLoopSet(colorctrl::ColorLoopSet),
    StopMoveStep(colorctrl::StopMoveStep),
    MoveColorTemperature(colorctrl::MoveColorTemperature),
    StepColorTemperature(colorctrl::StepColorTemperature),

    /* electrical measurement */
    GetProfileInfo(electrical::GetProfileInfo),
    GetMeasurementProfile(electrical::GetMeasurementProfile),
    GetProfileInfoResponse(electrical::GetProfileInfoResponse),
    GetMeasurementProfileResponse(electrical::GetMeasurementProfileResponse),

    /* ias zone */
    ZoneEnrollResponse(ias::ZoneEnrollResponse),
    InitiateNormalOperationMode(ias::InitiateNormalOperationMode),
    InitiateTestMode(ias::InitiateTestMode),
    ZoneStatusChangeNotification(ias::ZoneStatusChangeNotification),
    ZoneEnrollRequest(ias::ZoneEnrollRequest),

    /* ias ancillary control equipment */
    Arm(ias::Arm),
    Bypass(ias::Bypass),
    Emergency(ias::Emergency),
    Fire(ias::Fire),
    Panic(ias::Panic),
    GetZoneIdMap(ias::GetZoneIdMap),
    GetZoneInformation(ias::GetZoneInformation),
    GetPanelStatus(ias::GetPanelStatus),
    GetBypassedZoneList(ias::GetBypassedZoneList),
    GetZoneStatus(ias::GetZoneStatus),
    ArmResponse(ias::ArmResponse),
    GetZoneIdMapResponse(ias::GetZoneIdMapResponse),
    GetZoneInformationResponse(ias::GetZoneInformationResponse),
    ZoneStatusChanged(ias::ZoneStatusChanged),
    PanelStatusChanged(ias::PanelStatusChanged),
    GetPanelStatusResponse(ias::GetPanelStatusResponse),
    SetBypassedZoneList(ias::SetBypassedZoneList),
    BypassResponse(ias::BypassResponse),
    GetZoneStatusResponse(ias::GetZoneStatusResponse),

    /* ias warning device */
    StartWarning(ias::StartWarning),
    Squawk(ias::Squawk),
}

impl CommandPayload {
    /// True for commands without parameters
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.fields().is_empty()
    }
}

/// Serialized as its shape: `{ "shape": .., "fields": [..] }`
impl Serialize for CommandPayload {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut obj = serializer.serialize_struct("CommandPayload", 2)?;
        obj.serialize_field("shape", self.name())?;
        obj.serialize_field("fields", self.fields())?;
        obj.end()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandDescriptor {
    pub name: &'static str,
    pub payload: CommandPayload,
}

impl CommandDescriptor {
    pub fn new(name: &'static str, payload: impl Into<CommandPayload>) -> Self {
        Self {
            name,
            payload: payload.into(),
        }
    }
}

/// Cluster-specific commands, keyed by command id.
///
/// `received` and `generated` are separate id spaces, seen from the server
/// side of the cluster.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CommandDescriptors {
    #[serde(serialize_with = "hexkey::serialize")]
    pub received: BTreeMap<u8, CommandDescriptor>,

    #[serde(serialize_with = "hexkey::serialize")]
    pub generated: BTreeMap<u8, CommandDescriptor>,
}

impl CommandDescriptors {
    #[must_use]
    pub const fn table(&self, direction: CommandDirection) -> &BTreeMap<u8, CommandDescriptor> {
        match direction {
            CommandDirection::Received => &self.received,
            CommandDirection::Generated => &self.generated,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.received.is_empty() && self.generated.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use crate::cluster::levelctrl::MoveToLevel;
    use crate::cluster::onoff::{On, OnWithTimedOff};
    use crate::command::{CommandDescriptor, CommandPayload, Field, Payload};

    #[test]
    fn empty_shape() {
        let payload = CommandPayload::from(On {});
        assert!(payload.is_empty());
        assert_eq!(payload.name(), "On");
        assert!(On::FIELDS.is_empty());
    }

    #[test]
    fn field_reflection() {
        let payload = CommandPayload::from(OnWithTimedOff::default());
        let names: Vec<&str> = payload.fields().iter().map(|f| f.name).collect();

        assert_eq!(names, ["on_off_control", "on_time", "off_wait_time"]);
        assert_eq!(
            MoveToLevel::FIELDS[0],
            Field {
                name: "level",
                ty: "u8"
            }
        );
    }

    #[test]
    fn descriptor_wraps_payload() {
        let desc = CommandDescriptor::new("MoveToLevel", MoveToLevel::default());
        assert!(matches!(desc.payload, CommandPayload::MoveToLevel(_)));
        assert_eq!(desc.payload.name(), MoveToLevel::NAME);
    }

    #[test]
    fn serialize_shape() {
        let desc = CommandDescriptor::new("On", On {});
        let json = serde_json::to_value(&desc).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "On",
                "payload": { "shape": "On", "fields": [] },
            })
        );
    }
}
