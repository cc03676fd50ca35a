//! Subcommand handlers

use std::path::Path;

use anyhow::Context;
use application::VoiceTranslationService;
use domain::{AudioFormat, Direction};
use tracing::info;

/// Read a recording and infer its format from the file extension
async fn read_audio(input: &Path) -> anyhow::Result<(Vec<u8>, AudioFormat)> {
    let audio = tokio::fs::read(input)
        .await
        .with_context(|| format!("Failed to read {}", input.display()))?;
    Ok((audio, AudioFormat::from_path(input)))
}

async fn write_audio(output: &Path, audio: &[u8]) -> anyhow::Result<()> {
    tokio::fs::write(output, audio)
        .await
        .with_context(|| format!("Failed to write {}", output.display()))?;
    info!(path = %output.display(), bytes = audio.len(), "Wrote audio");
    Ok(())
}

pub async fn transcribe(
    service: &VoiceTranslationService,
    input: &Path,
    direction: Direction,
) -> anyhow::Result<()> {
    let (audio, format) = read_audio(input).await?;
    let text = service.speech_to_text(audio, format, direction).await?;
    println!("{text}");
    Ok(())
}

pub async fn translate(
    service: &VoiceTranslationService,
    text: &str,
    direction: Direction,
) -> anyhow::Result<()> {
    let translation = service.translate(text, direction).await?;
    println!("{translation}");
    Ok(())
}

pub async fn speak(
    service: &VoiceTranslationService,
    text: &str,
    voice: &str,
    direction: Direction,
    output: &Path,
) -> anyhow::Result<()> {
    let speech = service.text_to_speech(text, voice, direction).await?;
    write_audio(output, &speech.audio_data).await?;
    println!("🔊 {}", output.display());
    Ok(())
}

pub async fn run(
    service: &VoiceTranslationService,
    input: &Path,
    voice: &str,
    direction: Direction,
    output: &Path,
) -> anyhow::Result<()> {
    let (audio, format) = read_audio(input).await?;
    let outcome = service.process(audio, format, voice, direction).await?;

    println!(
        "🎙️  {}: {}",
        direction.source_language(),
        outcome.source_text
    );
    println!(
        "🌐 {}: {}",
        direction.target_language(),
        outcome.translated_text
    );

    if outcome.audio.is_empty() {
        println!("⚠️  {}, nothing written", skip_reason(&outcome.source_text));
    } else {
        write_audio(output, &outcome.audio.audio_data).await?;
        println!("🔊 {}", output.display());
    }
    println!("⏱️  {}ms", outcome.processing_time_ms);
    Ok(())
}

/// Print component status; returns whether everything is usable
pub async fn status(service: &VoiceTranslationService) -> bool {
    let (recognizer, translator, synthesizer) = tokio::join!(
        service.is_recognizer_available(),
        service.is_translator_healthy(),
        service.is_synthesizer_available(),
    );

    println!("📊 Status:");
    println!(
        "   {} Recognizer (whisper.cpp, {})",
        mark(recognizer),
        service.recognition_model()
    );
    println!(
        "   {} Translator (Ollama, {})",
        mark(translator),
        service.translation_model()
    );
    println!("   {} Synthesizer (Google TTS)", mark(synthesizer));

    if translator {
        match service.available_models().await {
            Ok(models) if !models.is_empty() => {
                println!("📦 Models: {}", models.join(", "));
            },
            Ok(_) => println!("📦 Models: none pulled"),
            Err(e) => println!("📦 Models: {e}"),
        }
    }

    recognizer && translator && synthesizer
}

pub fn accents(service: &VoiceTranslationService) {
    println!("🗣️  English accents (pass with --voice):");
    for voice in service.voices() {
        println!("   {:<8} {}", voice.id, voice.name);
    }
}

const fn mark(ok: bool) -> &'static str {
    if ok { "✅" } else { "❌" }
}

fn skip_reason(source_text: &str) -> &'static str {
    if source_text.is_empty() {
        "No speech recognized"
    } else {
        "Translation came back empty"
    }
}
