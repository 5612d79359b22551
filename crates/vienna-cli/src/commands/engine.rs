use super::Context;
use crate::error::Result;
use crate::output::{self, EngineRecord};

pub fn run(ctx: &Context) -> Result<()> {
    let records: Vec<EngineRecord> = ctx
        .vienna
        .engine_versions()
        .into_iter()
        .map(|(tool, detection)| match detection {
            Ok(info) => EngineRecord {
                tool: tool.to_string(),
                path: Some(info.path.display().to_string()),
                version: info.version.map(|v| v.to_string()),
                error: None,
            },
            Err(e) => EngineRecord {
                tool: tool.to_string(),
                path: None,
                version: None,
                error: Some(e.to_string()),
            },
        })
        .collect();

    output::emit(ctx.format, &records, |out| output::write_engine_text(out, &records))
}
