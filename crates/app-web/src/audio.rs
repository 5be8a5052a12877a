use app_core::constants::PLAYER_FFT_SIZE;
use app_core::player::Player;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// One location's audio graph: media element source through a gain into an
/// analyser tap and on to the destination.
///
/// The analyser sits behind the gain, so muting also silences the
/// visualizer input rather than leaving the bars dancing over dead air.
pub struct AudioChain {
    pub element: web::HtmlAudioElement,
    pub gain: web::GainNode,
    pub analyser: web::AnalyserNode,
}

fn create_gain(
    audio_ctx: &web::AudioContext,
    value: f32,
    label: &str,
) -> Result<web::GainNode, ()> {
    match web::GainNode::new(audio_ctx) {
        Ok(g) => {
            g.gain().set_value(value);
            Ok(g)
        }
        Err(e) => {
            log::error!("{} GainNode error: {:?}", label, e);
            Err(())
        }
    }
}

pub fn build_chain(
    audio_ctx: &web::AudioContext,
    src: &str,
    volume: f32,
) -> Result<AudioChain, ()> {
    let element = web::HtmlAudioElement::new_with_src(src).map_err(|e| {
        log::error!("audio element error: {:?}", e);
    })?;
    element.set_loop(true);

    let source = audio_ctx.create_media_element_source(&element).map_err(|e| {
        log::error!("media source error: {:?}", e);
    })?;
    let gain = create_gain(audio_ctx, volume, "player")?;
    let analyser = audio_ctx.create_analyser().map_err(|e| {
        log::error!("analyser error: {:?}", e);
    })?;
    analyser.set_fft_size(PLAYER_FFT_SIZE);

    _ = source.connect_with_audio_node(&gain);
    _ = gain.connect_with_audio_node(&analyser);
    _ = analyser.connect_with_audio_node(&audio_ctx.destination());

    log::info!("[audio] chain ready for {}", src);
    Ok(AudioChain {
        element,
        gain,
        analyser,
    })
}

/// Start playback. Autoplay rejections are logged, not surfaced; the user
/// gets sound on their first interaction once the context resumes.
pub fn play(chain: &AudioChain) {
    match chain.element.play() {
        Ok(promise) => {
            spawn_local(async move {
                if let Err(e) = JsFuture::from(promise).await {
                    log::warn!("[audio] autoplay blocked: {:?}", e);
                }
            });
        }
        Err(e) => log::error!("[audio] play failed: {:?}", e),
    }
}

pub fn pause(chain: &AudioChain) {
    _ = chain.element.pause();
}

#[inline]
pub fn set_volume(chain: &AudioChain, volume: f32) {
    chain.gain.gain().set_value(volume);
}

/// Pull the current byte spectrum and fold it into the player's bars.
pub fn sample_bars(chain: &AudioChain, buf: &mut Vec<u8>, player: &mut Player) {
    let bins = chain.analyser.frequency_bin_count() as usize;
    if buf.len() != bins {
        buf.resize(bins, 0);
    }
    chain.analyser.get_byte_frequency_data(buf);
    player.update_bars(buf);
}
