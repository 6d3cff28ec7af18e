use advent_harness::{Answer, ParseError, PartSpec, Puzzle, SolveError};
use advent_harness_macros::AutoRegisterPuzzle;
use anyhow::anyhow;

#[derive(AutoRegisterPuzzle)]
#[puzzle(year = 2024, day = 2, tags = ["2024", "grid"])]
pub struct Solver;

// A transmission is a stack of digit layers over a fixed-size screen; digit
// 2 is transparent. Part 2 renders the composited image on the console,
// which is why it is declared as a printing part.
#[derive(Debug)]
pub struct SharedData {
    width: usize,
    height: usize,
    layers: Vec<Vec<u8>>,
}

impl Puzzle for Solver {
    type State = SharedData;

    const PARTS: &'static [PartSpec<Self::State>] =
        &[PartSpec::new(1, part_1), PartSpec::printing(2, part_2)];

    fn load(input: &str) -> Result<Self::State, ParseError> {
        parse_transmission(input).map_err(|e| ParseError::InvalidFormat(e.to_string()))
    }
}

fn parse_transmission(input: &str) -> anyhow::Result<SharedData> {
    let mut lines = input.trim().lines();
    let header = lines.next().ok_or_else(|| anyhow!("empty input"))?;
    let (width, height) = header
        .split_once(' ')
        .ok_or_else(|| anyhow!("header must be 'WIDTH HEIGHT'"))?;
    let width: usize = width.parse()?;
    let height: usize = height.parse()?;
    if width == 0 || height == 0 {
        return Err(anyhow!("screen dimensions must be positive"));
    }

    let digits = lines.next().ok_or_else(|| anyhow!("missing pixel data"))?;
    let pixels = digits
        .trim()
        .bytes()
        .map(|b| match b {
            b'0'..=b'9' => Ok(b - b'0'),
            _ => Err(anyhow!("pixel data must be decimal digits")),
        })
        .collect::<anyhow::Result<Vec<u8>>>()?;

    let layer_size = width * height;
    if pixels.is_empty() || pixels.len() % layer_size != 0 {
        return Err(anyhow!(
            "pixel count {} is not a multiple of {}x{}",
            pixels.len(),
            width,
            height
        ));
    }

    let layers = pixels.chunks(layer_size).map(<[u8]>::to_vec).collect();
    Ok(SharedData {
        width,
        height,
        layers,
    })
}

fn part_1(shared: &mut SharedData) -> Result<Answer, SolveError> {
    let count = |layer: &[u8], digit: u8| layer.iter().filter(|&&d| d == digit).count();
    let flattest = shared
        .layers
        .iter()
        .min_by_key(|layer| count(layer, 0))
        .ok_or_else(|| SolveError::Other("no layers".to_string()))?;
    Ok(Answer::new(count(flattest, 1) * count(flattest, 2)))
}

fn part_2(shared: &mut SharedData) -> Result<Answer, SolveError> {
    let mut rows = Vec::with_capacity(shared.height);
    for y in 0..shared.height {
        let mut row = String::with_capacity(shared.width);
        for x in 0..shared.width {
            let index = y * shared.width + x;
            let visible = shared
                .layers
                .iter()
                .map(|layer| layer[index])
                .find(|&d| d != 2)
                .unwrap_or(2);
            row.push(if visible == 1 { '#' } else { '.' });
        }
        rows.push(row);
    }

    let image = rows.join("\n");
    println!("{image}");
    Ok(Answer::new(image))
}
