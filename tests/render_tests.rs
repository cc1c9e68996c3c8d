use ragdoll::{
    Anchor, Canvas, Color, NoOpStepObserver, Palette, Part, PartGroup, Ragdoll, RagdollConfig,
    Renderer, Stage, Texture, TextureMap, Vec2,
};

#[derive(Debug, PartialEq)]
enum Op {
    Save,
    Restore,
    Translate(f64, f64),
    Rotate(f64),
    Image(&'static str, f64, f64, f64, f64),
    Fill(Color, f64, f64, f64, f64),
}

struct Image {
    name: &'static str,
    loaded: bool,
}

impl Texture for Image {
    fn is_ready(&self) -> bool {
        self.loaded
    }
}

#[derive(Default)]
struct RecordingCanvas {
    ops: Vec<Op>,
}

impl Canvas for RecordingCanvas {
    type Texture = Image;

    fn save(&mut self) { self.ops.push(Op::Save); }
    fn restore(&mut self) { self.ops.push(Op::Restore); }
    fn translate(&mut self, x: f64, y: f64) { self.ops.push(Op::Translate(x, y)); }
    fn rotate(&mut self, angle: f64) { self.ops.push(Op::Rotate(angle)); }
    fn draw_texture(&mut self, texture: &Image, x: f64, y: f64, w: f64, h: f64) {
        self.ops.push(Op::Image(texture.name, x, y, w, h));
    }
    fn fill_rect(&mut self, color: Color, x: f64, y: f64, w: f64, h: f64) {
        self.ops.push(Op::Fill(color, x, y, w, h));
    }
}

impl RecordingCanvas {
    fn images(&self) -> Vec<&'static str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Image(name, ..) => Some(*name),
                _ => None,
            })
            .collect()
    }

    fn fills(&self) -> usize {
        self.ops.iter().filter(|op| matches!(op, Op::Fill(..))).count()
    }
}

fn doll() -> Ragdoll<f32> {
    let mut d = Ragdoll::new(
        Anchor::new(100.0, 100.0, 40.0, 60.0),
        Stage::new(400.0, 800.0),
        RagdollConfig::new(),
        17,
    )
    .unwrap();
    d.apply_impulse(Vec2::new(-4.0, -10.0)).unwrap();
    for _ in 0..20 {
        d.step(&mut NoOpStepObserver);
    }
    d
}

#[test]
fn untextured_parts_fill_with_palette_colors() {
    let d = doll();
    let mut canvas = RecordingCanvas::default();
    Renderer::<TextureMap<Image>>::new(None).draw(&d, &mut canvas);

    assert_eq!(canvas.ops.len(), 10 * 5);
    assert_eq!(canvas.fills(), 10);
    let palette = Palette::default();
    match &canvas.ops[3] {
        Op::Fill(color, ..) => assert_eq!(*color, palette.head),
        other => panic!("expected head fill, got {:?}", other),
    }
    match &canvas.ops[8] {
        Op::Fill(color, ..) => assert_eq!(*color, palette.torso),
        other => panic!("expected torso fill, got {:?}", other),
    }
}

#[test]
fn each_part_is_wrapped_in_its_own_transform() {
    let d = doll();
    let mut canvas = RecordingCanvas::default();
    Renderer::<TextureMap<Image>>::new(None).draw(&d, &mut canvas);

    for (chunk, part) in canvas.ops.chunks(5).zip(Part::ALL) {
        let p = d.particle(part);
        assert_eq!(chunk[0], Op::Save);
        assert_eq!(chunk[1], Op::Translate(p.pos.x as f64, p.pos.y as f64));
        assert_eq!(chunk[2], Op::Rotate(p.angle as f64));
        let (w, h) = (p.width as f64, p.height as f64);
        match &chunk[3] {
            Op::Fill(_, x, y, fw, fh) => {
                assert_eq!((*x, *y, *fw, *fh), (-w / 2.0, -h / 2.0, w, h));
            }
            other => panic!("{:?}: expected fill, got {:?}", part, other),
        }
        assert_eq!(chunk[4], Op::Restore);
    }
}

#[test]
fn textures_are_looked_up_by_group() {
    let d = doll();
    let mut textures = TextureMap::new();
    textures.insert(PartGroup::Head, Image { name: "head", loaded: true });
    textures.insert(PartGroup::Forearm, Image { name: "forearm", loaded: true });
    textures.insert(PartGroup::Thigh, Image { name: "thigh", loaded: false });

    let mut canvas = RecordingCanvas::default();
    Renderer::new(Some(&textures)).draw(&d, &mut canvas);

    assert_eq!(canvas.images(), vec!["head", "forearm", "forearm"]);
    assert_eq!(canvas.fills(), 7);
}

#[test]
fn late_loading_texture_is_picked_up() {
    let d = doll();
    let mut textures = TextureMap::new();
    textures.insert_named("torso", Image { name: "torso", loaded: false }).unwrap();

    let mut first = RecordingCanvas::default();
    Renderer::new(Some(&textures)).draw(&d, &mut first);
    assert!(first.images().is_empty());

    if let Some(img) = textures.get_mut(PartGroup::Torso) {
        img.loaded = true;
    }
    let mut second = RecordingCanvas::default();
    Renderer::new(Some(&textures)).draw(&d, &mut second);
    assert_eq!(second.images(), vec!["torso"]);
}

#[test]
fn custom_palette_is_used() {
    let d = doll();
    let palette = Palette {
        head: Color::rgb(255, 0, 0),
        torso: Color::rgb(0, 255, 0),
        limb: Color::rgb(0, 0, 255),
    };
    let mut canvas = RecordingCanvas::default();
    Renderer::<TextureMap<Image>>::new(None)
        .with_palette(palette)
        .draw(&d, &mut canvas);
    let limb_fills = canvas
        .ops
        .iter()
        .filter(|op| matches!(op, Op::Fill(c, ..) if *c == Color::rgb(0, 0, 255)))
        .count();
    assert_eq!(limb_fills, 8);
}

#[test]
fn untextured_renderer_draws_flat_rectangles() {
    use ragdoll::NoTexture;

    #[derive(Default)]
    struct Counter {
        fills: usize,
        depth: i32,
    }

    impl Canvas for Counter {
        type Texture = NoTexture;
        fn save(&mut self) { self.depth += 1; }
        fn restore(&mut self) { self.depth -= 1; }
        fn translate(&mut self, _x: f64, _y: f64) {}
        fn rotate(&mut self, _angle: f64) {}
        fn draw_texture(&mut self, _t: &NoTexture, _x: f64, _y: f64, _w: f64, _h: f64) {
            panic!("no textures to draw");
        }
        fn fill_rect(&mut self, _c: Color, _x: f64, _y: f64, _w: f64, _h: f64) {
            assert_eq!(self.depth, 1);
            self.fills += 1;
        }
    }

    let d = doll();
    let mut canvas = Counter::default();
    Renderer::untextured().draw(&d, &mut canvas);
    assert_eq!(canvas.fills, 10);
    assert_eq!(canvas.depth, 0);
}
