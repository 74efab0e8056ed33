//! Track tag lookup tables
//!
//! Short tags used by playlist authors (`type="mp4"`, `dlna_extras="avchd"`)
//! are mapped to full MIME types and DLNA profile names. Lookups are
//! case-insensitive and the first matching entry wins.

/// Ordered, case-insensitive tag table
#[derive(Debug, Clone, Copy)]
pub struct TagTable {
    entries: &'static [(&'static str, &'static str)],
}

impl TagTable {
    pub const fn new(entries: &'static [(&'static str, &'static str)]) -> Self {
        Self { entries }
    }

    /// Resolve a raw tag, first case-insensitive match wins
    pub fn lookup(&self, tag: &[u8]) -> Option<&'static str> {
        if tag.is_empty() {
            return None;
        }
        self.entries
            .iter()
            .find(|(key, _)| key.as_bytes().eq_ignore_ascii_case(tag))
            .map(|(_, value)| *value)
    }
}

/// `type` attribute → MIME type
pub static MIME_TYPES: TagTable = TagTable::new(&[
    ("avi", "video/avi"),
    ("asf", "video/x-ms-asf"),
    ("wmv", "video/x-ms-wmv"),
    ("mp4", "video/mp4"),
    ("mpeg", "video/mpeg"),
    ("mpeg_ts", "video/mpeg"),
    ("mpeg1", "video/mpeg"),
    ("mpeg2", "video/mpeg2"),
    ("ts", "video/mp2t"),
    ("mp2t", "video/mp2t"),
    ("mp2p", "video/mp2p"),
    ("mov", "video/quicktime"),
    ("mkv", "video/x-mkv"),
    ("3gp", "video/3gpp"),
    ("flv", "video/x-flv"),
    ("aac", "audio/x-aac"),
    ("ac3", "audio/x-ac3"),
    ("mp3", "audio/mpeg"),
    ("ogg", "application/ogg"),
    ("wma", "audio/x-ms-wma"),
]);

/// `dlna_extras` attribute → DLNA profile name
pub static DLNA_PROFILES: TagTable = TagTable::new(&[
    ("mpeg_ps_pal", "MPEG_PS_PAL"),
    ("mpeg_ps_pal_ac3", "MPEG_PS_PAL_XAC3"),
    ("mpeg_ps_ntsc", "MPEG_PS_NTSC"),
    ("mpeg_ps_ntsc_ac3", "MPEG_PS_NTSC_XAC3"),
    ("mpeg1", "MPEG1"),
    ("mpeg_ts_sd", "MPEG_TS_SD_NA_ISO"),
    ("mpeg_ts_hd", "MPEG_TS_HD_NA"),
    ("avchd", "AVC_TS_HD_50_AC3"),
    ("wmv_med_base", "WMVMED_BASE"),
    ("wmv_med_full", "WMVMED_FULL"),
    ("wmv_med_pro", "WMVMED_PRO"),
    ("wmv_high_full", "WMVHIGH_FULL"),
    ("wmv_high_pro", "WMVHIGH_PRO"),
    ("asf_mpeg4_sp", "MPEG4_P2_ASF_SP_G726"),
    ("asf_mpeg4_asp_l4", "MPEG4_P2_ASF_ASP_L4_SO_G726"),
    ("asf_mpeg4_asp_l5", "MPEG4_P2_ASF_ASP_L5_SO_G726"),
    ("asf_vc1_l1", "VC1_ASF_AP_L1_WMA"),
    ("mp4_avc_sd_mp3", "AVC_MP4_MP_SD_MPEG1_L3"),
    ("mp4_avc_sd_ac3", "AVC_MP4_MP_SD_AC3"),
    ("mp4_avc_hd_ac3", "AVC_MP4_MP_HD_AC3"),
    ("mp4_avc_sd_aac", "AVC_MP4_MP_SD_AAC_MULT5"),
    ("mpeg_ts_hd_mp3", "AVC_TS_MP_HD_MPEG1_L3"),
    ("mpeg_ts_hd_ac3", "AVC_TS_MP_HD_AC3"),
    ("mpeg_ts_mpeg4_asp_mp3", "MPEG4_P2_TS_ASP_MPEG1_L3"),
    ("mpeg_ts_mpeg4_asp_ac3", "MPEG4_P2_TS_ASP_AC3"),
    ("avi", "AVI"),
    ("divx5", "PV_DIVX_DX50"),
    ("mp3", "MP3"),
    ("ac3", "AC3"),
    ("wma_base", "WMABASE"),
    ("wma_full", "WMAFULL"),
    ("wma_pro", "WMAPRO"),
]);
