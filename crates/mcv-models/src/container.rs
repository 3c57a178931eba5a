//! Output containers and MPEG-2 transport stream settings.

string_enum! {
    /// Output container. Selects which member of `ContainerSettings` applies.
    pub enum ContainerType {
        F4V => "F4V",
        Ismv => "ISMV",
        M2Ts => "M2TS",
        M3U8 => "M3U8",
        Cmfc => "CMFC",
        Mov => "MOV",
        Mp4 => "MP4",
        Mpd => "MPD",
        Mxf => "MXF",
        Raw => "RAW",
    }
}

string_enum! {
    pub enum M2tsAudioBufferModel {
        Dvb => "DVB",
        Atsc => "ATSC",
    }
}

string_enum! {
    pub enum M2tsBufferModel {
        Multiplex => "MULTIPLEX",
        None => "NONE",
    }
}

string_enum! {
    pub enum M2tsEbpAudioInterval {
        VideoAndFixedIntervals => "VIDEO_AND_FIXED_INTERVALS",
        VideoInterval => "VIDEO_INTERVAL",
    }
}

string_enum! {
    pub enum M2tsEbpPlacement {
        VideoAndAudioPids => "VIDEO_AND_AUDIO_PIDS",
        VideoPid => "VIDEO_PID",
    }
}

string_enum! {
    pub enum M2tsEsRateInPes {
        Include => "INCLUDE",
        Exclude => "EXCLUDE",
    }
}

string_enum! {
    pub enum M2tsForceTsVideoEbpOrder {
        Force => "FORCE",
        Default => "DEFAULT",
    }
}

string_enum! {
    /// Pass Nielsen ID3 tags through to the output.
    pub enum M2tsNielsenId3 {
        Insert => "INSERT",
        None => "NONE",
    }
}

string_enum! {
    pub enum M2tsPcrControl {
        PcrEveryPesPacket => "PCR_EVERY_PES_PACKET",
        ConfiguredPcrPeriod => "CONFIGURED_PCR_PERIOD",
    }
}

string_enum! {
    /// `CBR` pads the transport stream with null packets to a constant rate.
    pub enum M2tsRateMode {
        Vbr => "VBR",
        Cbr => "CBR",
    }
}

string_enum! {
    pub enum M2tsScte35Source {
        Passthrough => "PASSTHROUGH",
        None => "NONE",
    }
}

string_enum! {
    /// Segmentation markers inserted for downstream packagers.
    pub enum M2tsSegmentationMarkers {
        None => "NONE",
        RaiSegstart => "RAI_SEGSTART",
        RaiAdapt => "RAI_ADAPT",
        PsiSegstart => "PSI_SEGSTART",
        Ebp => "EBP",
        EbpLegacy => "EBP_LEGACY",
    }
}

string_enum! {
    pub enum M2tsSegmentationStyle {
        MaintainCadence => "MAINTAIN_CADENCE",
        ResetCadence => "RESET_CADENCE",
    }
}

string_enum! {
    /// Source of the service description table.
    pub enum OutputSdt {
        SdtFollow => "SDT_FOLLOW",
        SdtFollowIfPresent => "SDT_FOLLOW_IF_PRESENT",
        SdtManual => "SDT_MANUAL",
        SdtNone => "SDT_NONE",
    }
}
record! {
    /// DVB network information table.
    pub struct DvbNitSettings {
        #[validate(range(min = 0, max = 65535))]
        network_id: i32 => with_network_id,
        #[validate(length(min = 1, max = 256))]
        network_name: String => with_network_name,
        /// Milliseconds between NIT insertions.
        #[validate(range(min = 25, max = 10000))]
        nit_interval: i32 => with_nit_interval,
    }
}

record! {
    /// DVB service description table.
    pub struct DvbSdtSettings {
        output_sdt: OutputSdt => with_output_sdt,
        #[validate(range(min = 25, max = 2000))]
        sdt_interval: i32 => with_sdt_interval,
        #[validate(length(min = 1, max = 256))]
        service_name: String => with_service_name,
        #[validate(length(min = 1, max = 256))]
        service_provider_name: String => with_service_provider_name,
    }
}

record! {
    /// DVB time and date table.
    pub struct DvbTdtSettings {
        #[validate(range(min = 1000, max = 30000))]
        tdt_interval: i32 => with_tdt_interval,
    }
}

record! {
    /// SCTE-35 markers driven by an ESAM (event signalling) document.
    pub struct M2tsScte35Esam {
        #[validate(range(min = 32, max = 8182))]
        scte35_esam_pid: i32 => with_scte35_esam_pid,
    }
}

record! {
    /// MPEG-2 transport stream muxer settings.
    pub struct M2tsSettings {
        audio_buffer_model: M2tsAudioBufferModel => with_audio_buffer_model,
        #[validate(range(min = 0))]
        audio_frames_per_pes: i32 => with_audio_frames_per_pes,
        audio_pids: Vec<i32> => with_audio_pids,
        /// Output rate in bits/second. Zero lets the muxer pick.
        #[validate(range(min = 0))]
        bitrate: i32 => with_bitrate,
        buffer_model: M2tsBufferModel => with_buffer_model,
        #[validate(nested)]
        dvb_nit_settings: DvbNitSettings => with_dvb_nit_settings,
        #[validate(nested)]
        dvb_sdt_settings: DvbSdtSettings => with_dvb_sdt_settings,
        dvb_sub_pids: Vec<i32> => with_dvb_sub_pids,
        #[validate(nested)]
        dvb_tdt_settings: DvbTdtSettings => with_dvb_tdt_settings,
        #[validate(range(min = 32, max = 8182))]
        dvb_teletext_pid: i32 => with_dvb_teletext_pid,
        ebp_audio_interval: M2tsEbpAudioInterval => with_ebp_audio_interval,
        ebp_placement: M2tsEbpPlacement => with_ebp_placement,
        es_rate_in_pes: M2tsEsRateInPes => with_es_rate_in_pes,
        force_ts_video_ebp_order: M2tsForceTsVideoEbpOrder => with_force_ts_video_ebp_order,
        fragment_time: f64 => with_fragment_time,
        #[validate(range(min = 0, max = 500))]
        max_pcr_interval: i32 => with_max_pcr_interval,
        #[validate(range(min = 0, max = 10000))]
        min_ebp_interval: i32 => with_min_ebp_interval,
        nielsen_id3: M2tsNielsenId3 => with_nielsen_id3,
        null_packet_bitrate: f64 => with_null_packet_bitrate,
        #[validate(range(min = 0, max = 1000))]
        pat_interval: i32 => with_pat_interval,
        pcr_control: M2tsPcrControl => with_pcr_control,
        #[validate(range(min = 32, max = 8182))]
        pcr_pid: i32 => with_pcr_pid,
        #[validate(range(min = 0, max = 1000))]
        pmt_interval: i32 => with_pmt_interval,
        #[validate(range(min = 32, max = 8182))]
        pmt_pid: i32 => with_pmt_pid,
        #[validate(range(min = 32, max = 8182))]
        private_metadata_pid: i32 => with_private_metadata_pid,
        #[validate(range(min = 0, max = 65535))]
        program_number: i32 => with_program_number,
        rate_mode: M2tsRateMode => with_rate_mode,
        #[validate(nested)]
        scte35_esam: M2tsScte35Esam => with_scte35_esam,
        #[validate(range(min = 32, max = 8182))]
        scte35_pid: i32 => with_scte35_pid,
        scte35_source: M2tsScte35Source => with_scte35_source,
        segmentation_markers: M2tsSegmentationMarkers => with_segmentation_markers,
        segmentation_style: M2tsSegmentationStyle => with_segmentation_style,
        segmentation_time: f64 => with_segmentation_time,
        #[validate(range(min = 32, max = 8182))]
        timed_metadata_pid: i32 => with_timed_metadata_pid,
        #[validate(range(min = 0, max = 65535))]
        transport_stream_id: i32 => with_transport_stream_id,
        #[validate(range(min = 32, max = 8182))]
        video_pid: i32 => with_video_pid,
    }
}

record! {
    /// Container selection plus the settings block for that container.
    pub struct ContainerSettings {
        container: ContainerType => with_container,
        #[validate(nested)]
        m2ts_settings: M2tsSettings => with_m2ts_settings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn test_pid_ranges() {
        assert!(M2tsSettings::new().with_video_pid(481).validate().is_ok());
        assert!(M2tsSettings::new().with_video_pid(31).validate().is_err());
        assert!(M2tsSettings::new().with_pmt_pid(8183).validate().is_err());
    }

    #[test]
    fn test_nested_tables_validate() {
        let settings = M2tsSettings::new()
            .with_dvb_sdt_settings(DvbSdtSettings::new().with_service_name(""));
        assert!(settings.validate().is_err());

        let settings = M2tsSettings::new()
            .with_dvb_sdt_settings(DvbSdtSettings::new().with_output_sdt(OutputSdt::SdtFollow));
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_container_wire_shape() {
        let settings = ContainerSettings::new()
            .with_container(ContainerType::M2Ts)
            .with_m2ts_settings(M2tsSettings::new().with_audio_pids(vec![482, 483]));

        let json = serde_json::to_value(&settings).unwrap();
        assert_eq!(json["container"], "M2TS");
        assert_eq!(json["m2tsSettings"]["audioPids"], serde_json::json!([482, 483]));
        assert_eq!(
            settings.to_string(),
            "{container: M2TS, m2ts_settings: {audio_pids: [482, 483]}}"
        );
    }
}
