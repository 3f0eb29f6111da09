//! Interactive repricing session.
//!
//! Chat input goes to the command boundary; slash inputs drive the local
//! actions: load a file, the three quick actions, CSV download, and the
//! voice round trip.

use std::io::{BufRead, Write};
use std::path::Path;

use anyhow::Result;
use tracing::info;

use repricer_config::RepricerConfig;
use repricer_core::{QuickAction, RepriceError};
use repricer_executor::{PriceSession, Reply, MSG_NO_TABLE};
use repricer_extract::{ContentKind, Ingestor};
use repricer_voice::{create_voice, VoiceCapability, VoiceProviderKind, MSG_VOICE_UNAVAILABLE};

const HELP: &str = "\
Escribe un comando de precios (ej: \"aumenta todo 10%\") o una accion:
  /cargar <archivo>   cargar PDF, hoja de calculo o imagen
  /aumentar10         subir todos los precios 10%
  /descuento15        bajar todos los precios 15%
  /redondear          redondear precios a 2 decimales
  /tabla              mostrar la tabla actual
  /exportar [ruta]    guardar CSV (precios_modificados.csv)
  /voz                dar un comando por voz
  /salir              terminar";

pub fn run(config: &RepricerConfig, preload: Option<&Path>) -> Result<()> {
    let mut session = PriceSession::new();
    let ingestor = Ingestor::builtin();
    let mut voice = create_voice(if config.voice.enabled {
        VoiceProviderKind::Console
    } else {
        VoiceProviderKind::Disabled
    });

    info!("[Repl] session {} started", session.id());
    println!("Cambio de Precios — /ayuda para ver las acciones");

    if let Some(path) = preload {
        let reply = load_file(&mut session, &ingestor, path);
        println!("{}", reply.text);
    }

    let stdin = std::io::stdin();
    let mut line = String::new();
    loop {
        print!("> ");
        std::io::stdout().flush()?;
        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if input == "/salir" || input == "/quit" {
            break;
        }
        let reply = dispatch(input, config, &mut session, &ingestor, voice.as_mut());
        println!("{}", reply.text);
        if reply.applied && voice.is_available() {
            // Spoken acknowledgment mirrors the printed one.
            let _ = voice.speak(&reply.text);
        }
    }
    Ok(())
}

fn dispatch(
    input: &str,
    config: &RepricerConfig,
    session: &mut PriceSession,
    ingestor: &Ingestor,
    voice: &mut dyn VoiceCapability,
) -> Reply {
    let (action, rest) = match input.split_once(char::is_whitespace) {
        Some((a, r)) => (a, r.trim()),
        None => (input, ""),
    };

    match action {
        "/ayuda" | "/help" => Reply::info(HELP),
        "/cargar" if !rest.is_empty() => load_file(session, ingestor, Path::new(rest)),
        "/cargar" => Reply::info("Uso: /cargar <archivo>"),
        "/aumentar10" => session.quick(QuickAction::IncreaseTenPercent),
        "/descuento15" => session.quick(QuickAction::DecreaseFifteenPercent),
        "/redondear" => session.quick(QuickAction::RoundTwoDecimals),
        "/tabla" => show_table(session),
        "/exportar" => export(session, config, rest),
        "/voz" => voice_command(session, voice),
        _ if action.starts_with('/') => Reply::info(format!("Accion desconocida: {}", action)),
        _ => session.command(input),
    }
}

fn load_file(session: &mut PriceSession, ingestor: &Ingestor, path: &Path) -> Reply {
    let Some(kind) = ContentKind::from_extension(path) else {
        return Reply::info(format!("Tipo de archivo no soportado: {}", path.display()));
    };
    match std::fs::read(path) {
        Ok(bytes) => session.upload(ingestor, &bytes, kind),
        Err(e) => Reply::info(format!("No se pudo leer {}: {}", path.display(), e)),
    }
}

fn show_table(session: &PriceSession) -> Reply {
    match session.export_csv() {
        Ok(file) => Reply::info(String::from_utf8_lossy(&file.bytes).trim_end().to_string()),
        Err(e) => error_reply(e),
    }
}

fn export(session: &PriceSession, config: &RepricerConfig, dest: &str) -> Reply {
    let file = match session.export_csv() {
        Ok(file) => file,
        Err(e) => return error_reply(e),
    };
    let path = if dest.is_empty() { config.export.filename.as_str() } else { dest };
    match std::fs::write(path, &file.bytes) {
        Ok(()) => Reply::info(format!("CSV guardado en {}", path)),
        Err(e) => Reply::info(format!("No se pudo guardar {}: {}", path, e)),
    }
}

fn error_reply(e: RepriceError) -> Reply {
    match e {
        RepriceError::NoTable => Reply::info(MSG_NO_TABLE),
        other => Reply::info(format!("{}", other)),
    }
}

fn voice_command(session: &mut PriceSession, voice: &mut dyn VoiceCapability) -> Reply {
    if !voice.is_available() {
        return Reply::info(MSG_VOICE_UNAVAILABLE);
    }
    println!("Hablando...");
    match voice.transcribe() {
        Ok(command) if command.is_empty() => Reply::info("No se escucho ningun comando"),
        Ok(command) => {
            println!("Comando: {}", command);
            session.command(&command)
        }
        Err(e) => Reply::info(format!("{}", e)),
    }
}
