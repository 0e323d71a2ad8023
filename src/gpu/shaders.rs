//! WGSL for the two instanced pipelines.
//!
//! Both shaders work in logical surface pixels and share the `View`
//! uniform. Output is premultiplied: a solid core composited over a
//! gaussian glow halo.

pub const LINE_SHADER: &str = r#"
struct View {
    size: vec2<f32>,
    _pad: vec2<f32>,
};

@group(0) @binding(0) var<uniform> view: View;

struct LineInstance {
    @location(0) p0: vec2<f32>,
    @location(1) p1: vec2<f32>,
    @location(2) color: vec4<f32>,
    @location(3) glow_color: vec4<f32>,
    // x = width, y = glow blur
    @location(4) params: vec2<f32>,
};

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    // Position in the segment frame: x along the segment from p0, y across it.
    @location(0) local: vec2<f32>,
    @location(1) color: vec4<f32>,
    @location(2) glow_color: vec4<f32>,
    // x = half width, y = glow blur, z = segment length
    @location(3) shape: vec3<f32>,
};

fn to_clip(pos: vec2<f32>) -> vec4<f32> {
    let size = max(view.size, vec2<f32>(1.0, 1.0));
    return vec4<f32>(pos.x / size.x * 2.0 - 1.0, 1.0 - pos.y / size.y * 2.0, 0.0, 1.0);
}

@vertex
fn vs_main(@builtin(vertex_index) vertex_index: u32, line: LineInstance) -> VertexOutput {
    var corners = array<vec2<f32>, 6>(
        vec2<f32>(0.0, 0.0),
        vec2<f32>(1.0, 0.0),
        vec2<f32>(0.0, 1.0),
        vec2<f32>(0.0, 1.0),
        vec2<f32>(1.0, 0.0),
        vec2<f32>(1.0, 1.0),
    );
    let corner = corners[vertex_index];

    let delta = line.p1 - line.p0;
    let len = length(delta);
    var dir = vec2<f32>(1.0, 0.0);
    if len > 0.0001 {
        dir = delta / len;
    }
    let normal = vec2<f32>(-dir.y, dir.x);

    let half_width = line.params.x * 0.5;
    let blur = line.params.y;
    let reach = half_width + blur + 1.0;

    let along = mix(-reach, len + reach, corner.x);
    let across = mix(-reach, reach, corner.y);
    let pos = line.p0 + dir * along + normal * across;

    var out: VertexOutput;
    out.clip_position = to_clip(pos);
    out.local = vec2<f32>(along, across);
    out.color = line.color;
    out.glow_color = line.glow_color;
    out.shape = vec3<f32>(half_width, blur, len);
    return out;
}

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    let half_width = in.shape.x;
    let blur = in.shape.y;
    let len = in.shape.z;

    let outside = max(max(-in.local.x, in.local.x - len), 0.0);
    let dist = length(vec2<f32>(outside, in.local.y));

    let coverage = clamp(half_width + 0.5 - dist, 0.0, 1.0);
    let core_a = in.color.a * coverage;

    var glow_a = 0.0;
    if blur > 0.0 {
        let sigma = blur * 0.5;
        let t = max(dist - half_width, 0.0);
        glow_a = in.glow_color.a * exp(-(t * t) / (2.0 * sigma * sigma));
    }

    let alpha = core_a + glow_a * (1.0 - core_a);
    if alpha < 0.002 {
        discard;
    }
    let rgb = in.color.rgb * core_a + in.glow_color.rgb * glow_a * (1.0 - core_a);
    return vec4<f32>(rgb, alpha);
}
"#;

pub const DISC_SHADER: &str = r#"
struct View {
    size: vec2<f32>,
    _pad: vec2<f32>,
};

@group(0) @binding(0) var<uniform> view: View;

struct DiscInstance {
    @location(0) center: vec2<f32>,
    // x = radius, y = glow blur
    @location(1) params: vec2<f32>,
    @location(2) color: vec4<f32>,
    @location(3) glow_color: vec4<f32>,
};

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) local: vec2<f32>,
    @location(1) color: vec4<f32>,
    @location(2) glow_color: vec4<f32>,
    @location(3) params: vec2<f32>,
};

fn to_clip(pos: vec2<f32>) -> vec4<f32> {
    let size = max(view.size, vec2<f32>(1.0, 1.0));
    return vec4<f32>(pos.x / size.x * 2.0 - 1.0, 1.0 - pos.y / size.y * 2.0, 0.0, 1.0);
}

@vertex
fn vs_main(@builtin(vertex_index) vertex_index: u32, disc: DiscInstance) -> VertexOutput {
    var corners = array<vec2<f32>, 6>(
        vec2<f32>(-1.0, -1.0),
        vec2<f32>( 1.0, -1.0),
        vec2<f32>(-1.0,  1.0),
        vec2<f32>(-1.0,  1.0),
        vec2<f32>( 1.0, -1.0),
        vec2<f32>( 1.0,  1.0),
    );
    let reach = disc.params.x + disc.params.y + 1.0;
    let local = corners[vertex_index] * reach;

    var out: VertexOutput;
    out.clip_position = to_clip(disc.center + local);
    out.local = local;
    out.color = disc.color;
    out.glow_color = disc.glow_color;
    out.params = disc.params;
    return out;
}

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    let radius = in.params.x;
    let blur = in.params.y;
    let dist = length(in.local);

    let coverage = clamp(radius + 0.5 - dist, 0.0, 1.0);
    let core_a = in.color.a * coverage;

    var glow_a = 0.0;
    if blur > 0.0 {
        let sigma = blur * 0.5;
        let t = max(dist - radius, 0.0);
        glow_a = in.glow_color.a * exp(-(t * t) / (2.0 * sigma * sigma));
    }

    let alpha = core_a + glow_a * (1.0 - core_a);
    if alpha < 0.002 {
        discard;
    }
    let rgb = in.color.rgb * core_a + in.glow_color.rgb * glow_a * (1.0 - core_a);
    return vec4<f32>(rgb, alpha);
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    fn validate(name: &str, source: &str) {
        let module = naga::front::wgsl::parse_str(source)
            .unwrap_or_else(|e| panic!("{name} failed to parse:\n{}", e.emit_to_string(source)));

        let mut validator = naga::valid::Validator::new(
            naga::valid::ValidationFlags::all(),
            naga::valid::Capabilities::all(),
        );
        if let Err(e) = validator.validate(&module) {
            panic!("{name} failed validation: {e:?}");
        }
    }

    #[test]
    fn test_line_shader_is_valid_wgsl() {
        validate("line shader", LINE_SHADER);
    }

    #[test]
    fn test_disc_shader_is_valid_wgsl() {
        validate("disc shader", DISC_SHADER);
    }

    #[test]
    fn test_shaders_define_entry_points() {
        for src in [LINE_SHADER, DISC_SHADER] {
            assert!(src.contains("fn vs_main"));
            assert!(src.contains("fn fs_main"));
        }
    }
}
