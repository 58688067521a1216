//! Decoder-backed audio probe.
//!
//! Reads the real duration out of the audio stream with symphonia. The
//! scanner only needs a length, so when the container carries no frame
//! count (CBR mp3 without a Xing header) the packets are walked without
//! decoding instead.

use std::fs::File;
use std::io::ErrorKind;
use std::path::Path;
use std::time::Duration;

use memwave_core::{AudioProbe, Error, Result};
use symphonia::core::errors::Error as SymphoniaError;
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;

#[derive(Debug, Clone, Copy, Default)]
pub struct DecoderProbe;

impl AudioProbe for DecoderProbe {
    fn duration(&self, path: &Path) -> Result<Duration> {
        let file = File::open(path)?;
        let stream = MediaSourceStream::new(Box::new(file), Default::default());

        let mut hint = Hint::new();
        if let Some(ext) = path.extension().and_then(|ext| ext.to_str()) {
            hint.with_extension(ext);
        }

        let probed = symphonia::default::get_probe()
            .format(
                &hint,
                stream,
                &FormatOptions::default(),
                &MetadataOptions::default(),
            )
            .map_err(|err| probe_error(path, &err.to_string()))?;
        let mut format = probed.format;

        let track = format
            .default_track()
            .ok_or_else(|| probe_error(path, "no audio track"))?;
        let track_id = track.id;
        let params = track.codec_params.clone();
        let time_base = params
            .time_base
            .ok_or_else(|| probe_error(path, "no time base"))?;

        let frames = match params.n_frames {
            Some(frames) => frames,
            None => {
                let mut total = 0u64;
                loop {
                    match format.next_packet() {
                        Ok(packet) => {
                            if packet.track_id() == track_id {
                                total += packet.dur();
                            }
                        }
                        Err(SymphoniaError::IoError(err))
                            if err.kind() == ErrorKind::UnexpectedEof =>
                        {
                            break;
                        }
                        Err(err) => return Err(probe_error(path, &err.to_string())),
                    }
                }
                total
            }
        };

        let time = time_base.calc_time(frames);
        Ok(Duration::from_secs_f64(time.seconds as f64 + time.frac))
    }
}

fn probe_error(path: &Path, message: &str) -> Error {
    Error::AudioProbe(format!("{}: {message}", path.display()))
}
