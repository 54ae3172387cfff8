use std::fs::File;
use std::io::{self, Read, Write};
use std::path::Path;

use lenprefix_frame::{Encoder, FrameConfig, FrameWriter, ReadSource};

use crate::exit::{frame_error, io_error, CliResult, SUCCESS};
use crate::EncodeArgs;

pub fn run(args: &EncodeArgs) -> CliResult<i32> {
    let input = open_input(args.input.as_deref())?;

    let encoder = Encoder::with_config(FrameConfig {
        initial_capacity: args.initial_capacity,
    });
    let frame = encoder
        .read_frame(ReadSource::new(input))
        .map_err(frame_error)?;

    // The output may be the input file, so it is only created once the input is drained.
    let output = open_output(args.output.as_deref())?;
    FrameWriter::new(output)
        .write_frame(&frame)
        .map_err(frame_error)?;

    tracing::info!(
        bytes = frame.byte_count(),
        wire_size = frame.wire_size(),
        "encoded input"
    );
    Ok(SUCCESS)
}

fn open_input(path: Option<&Path>) -> CliResult<Box<dyn Read>> {
    match path {
        Some(path) => {
            let file = File::open(path)
                .map_err(|err| io_error(&format!("failed opening {}", path.display()), &err))?;
            Ok(Box::new(file))
        }
        None => Ok(Box::new(io::stdin().lock())),
    }
}

fn open_output(path: Option<&Path>) -> CliResult<Box<dyn Write>> {
    match path {
        Some(path) => {
            let file = File::create(path)
                .map_err(|err| io_error(&format!("failed creating {}", path.display()), &err))?;
            Ok(Box::new(file))
        }
        None => Ok(Box::new(io::stdout().lock())),
    }
}
