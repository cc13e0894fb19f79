use std::{env,
          io::{BufWriter, Write},
          fs::File,
          error::Error};
use rgb::RGB8;
use color_moreland::{ColorMap, DivergingMsh, Luminance, Msh, Preset,
                     RGBColor, Srgba};
use tracing_subscriber::EnvFilter;
use lazy_static::lazy_static;

lazy_static! {
    // Maps a lightness in [0, 100] to the gray of that lightness.
    static ref GRAY: Luminance = {
        let mut gray = Luminance::new(&[RGB8::new(0, 0, 0),
                                        RGB8::new(255, 255, 255)])
            .expect("black is darker than white");
        gray.set_max(100.);
        gray
    };
}

type Err = Box<dyn Error>;

fn css_string(c: &Srgba) -> String {
    let c = c.to_rgba8();
    format!("#{:02x}{:02x}{:02x}", c.r, c.g, c.b)
}

fn table_of_colors(fh: &mut impl Write, colors: &[Srgba],
                   width: u32, comment: &str) -> Result<(), Err> {
    writeln!(fh, "<table style=\"border: 0px;  border-spacing: 0px\"><tr>")?;
    for c in colors {
        writeln!(fh, "  <td style=\"width: {width}px; height: 30px; \
                      background-color: {}\"></td>",
                css_string(c))?;
    }
    writeln!(fh, "<td rowspan=\"2\" style=\"padding-left: 7px\">\
                  {comment}</td></tr><tr>")?;
    // Lightness only, to judge the luminance ramp.
    for c in colors {
        let gray = GRAY.at(c.lab().l.clamp(0., 100.))?;
        writeln!(fh, "  <td style=\"width: {width}px; height: 12px; \
                      background-color: {}\"></td>",
                 css_string(&gray))?;
    }
    writeln!(fh, "</tr></table><br/>")?;
    Ok(())
}

fn palette(fh: &mut impl Write, map: &dyn ColorMap, n: usize,
           width: u32, comment: &str) -> Result<(), Err> {
    let p = map.try_palette(n)?;
    table_of_colors(fh, p.colors(), width, comment)
}

fn main() -> Result<(), Err> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut fh = BufWriter::new(File::create("palettes.html")?);
    writeln!(fh, "<html>\n\
                  <head>\n\
                  <title>color-moreland: test {}</title>\n\
                  </head>\n\
                  <body>",
             env::args().next().unwrap_or_default())?;

    writeln!(fh, "<h3>Presets</h3>")?;
    for p in Preset::ALL {
        let map = p.color_map();
        palette(&mut fh, &*map, 9, 43, &format!("{} (9 colors)", p.name()))?;
        palette(&mut fh, &*map, 256, 1, p.name())?;
    }

    writeln!(fh, "<h3>Diverging maps from two colors</h3>")?;
    let red = RGB8::new(180, 4, 38).msh();
    let blue = RGB8::new(59, 76, 192).msh();
    let map = DivergingMsh::new(blue, red);
    palette(&mut fh, &map, 9, 43, "rgb(59,76,192) to rgb(180,4,38)")?;
    palette(&mut fh, &map, 256, 1, "")?;

    writeln!(fh, "<h3>Luminance maps from control colors</h3>")?;
    let map = Luminance::new(&[RGB8::new(0, 0, 0), RGB8::new(46, 4, 76),
                               RGB8::new(5, 106, 106), RGB8::new(196, 206, 10),
                               RGB8::new(255, 255, 255)])?;
    palette(&mut fh, &map, 256, 1, "black, purple, teal, yellow, white")?;
    let msh = Msh { m: 60., s: 0.9, h: 1.2 };
    writeln!(fh, "<p>MSH {msh:?} is {}</p>", css_string(&msh.lab().srgba(1.)))?;

    writeln!(fh, "</body>\n\
                  </html>")?;
    Ok(())
}
