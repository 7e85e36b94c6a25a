#![allow(dead_code)]

/// Builds PMD byte streams for tests.
#[derive(Clone, Debug)]
pub struct PmdBuilder {
    pub signature: [u8; 3],
    pub version: f32,
    pub name: Vec<u8>,
    pub comment: Vec<u8>,
    pub vertices: Vec<[f32; 3]>,
    pub indices: Vec<u16>,
    pub materials: Vec<u32>,
    pub bones: Vec<TestBone>,
    pub iks: Vec<TestIk>,
    pub morphs: Vec<TestMorph>,
    pub trailer: Vec<u8>,
}

#[derive(Clone, Debug)]
pub struct TestBone {
    pub name: Vec<u8>,
    pub parent: u16,
    pub tail: u16,
    pub kind: u8,
    pub ik_parent: u16,
    pub position: [f32; 3],
}

impl TestBone {
    pub fn new(name: &[u8], parent: u16, tail: u16) -> Self {
        Self { name: name.to_vec(), parent, tail, kind: 0, ik_parent: 0, position: [0.0; 3] }
    }
}

#[derive(Clone, Debug)]
pub struct TestIk {
    pub bone: u16,
    pub target: u16,
    pub iterations: u16,
    pub weight: f32,
    pub children: Vec<u16>,
}

#[derive(Clone, Debug)]
pub struct TestMorph {
    pub name: Vec<u8>,
    pub kind: u8,
    pub vertices: Vec<(u32, [f32; 3])>,
}

impl Default for PmdBuilder {
    fn default() -> Self {
        Self {
            signature: *b"Pmd",
            version: 1.0,
            name: b"test".to_vec(),
            comment: b"comment".to_vec(),
            vertices: vec![],
            indices: vec![],
            materials: vec![],
            bones: vec![],
            iks: vec![],
            morphs: vec![],
            trailer: vec![],
        }
    }
}

fn put_text(out: &mut Vec<u8>, text: &[u8], len: usize) {
    let mut field = vec![0u8; len];
    let n = text.len().min(len);
    field[..n].copy_from_slice(&text[..n]);
    out.extend_from_slice(&field);
}

fn put_f32s(out: &mut Vec<u8>, values: &[f32]) {
    for v in values {
        out.extend_from_slice(&v.to_le_bytes());
    }
}

impl PmdBuilder {
    /// A triangle with one material.
    pub fn triangle() -> Self {
        Self {
            vertices: vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
            indices: vec![0, 1, 2],
            materials: vec![3],
            ..Default::default()
        }
    }

    pub fn build(&self) -> Vec<u8> {
        let mut out = Vec::new();
        out.extend_from_slice(&self.signature);
        out.extend_from_slice(&self.version.to_le_bytes());
        put_text(&mut out, &self.name, 20);
        put_text(&mut out, &self.comment, 256);

        out.extend_from_slice(&(self.vertices.len() as i32).to_le_bytes());
        for (i, v) in self.vertices.iter().enumerate() {
            put_f32s(&mut out, v);
            put_f32s(&mut out, &[0.0, 1.0, 0.0]);
            put_f32s(&mut out, &[0.5, 0.25]);
            out.extend_from_slice(&(i as u16).to_le_bytes());
            out.extend_from_slice(&0u16.to_le_bytes());
            out.push(100);
            out.push(0);
        }

        out.extend_from_slice(&(self.indices.len() as i32).to_le_bytes());
        for i in &self.indices {
            out.extend_from_slice(&i.to_le_bytes());
        }

        out.extend_from_slice(&(self.materials.len() as i32).to_le_bytes());
        for count in &self.materials {
            put_f32s(&mut out, &[0.8, 0.8, 0.8, 1.0, 5.0, 0.1, 0.1, 0.1, 0.2, 0.2, 0.2]);
            out.push(0xFF);
            out.push(1);
            out.extend_from_slice(&count.to_le_bytes());
            put_text(&mut out, b"tex.bmp", 20);
        }

        out.extend_from_slice(&(self.bones.len() as u16).to_le_bytes());
        for bone in &self.bones {
            put_text(&mut out, &bone.name, 20);
            out.extend_from_slice(&bone.parent.to_le_bytes());
            out.extend_from_slice(&bone.tail.to_le_bytes());
            out.push(bone.kind);
            out.extend_from_slice(&bone.ik_parent.to_le_bytes());
            put_f32s(&mut out, &bone.position);
        }

        out.extend_from_slice(&(self.iks.len() as u16).to_le_bytes());
        for ik in &self.iks {
            out.extend_from_slice(&ik.bone.to_le_bytes());
            out.extend_from_slice(&ik.target.to_le_bytes());
            out.push(ik.children.len() as u8);
            out.extend_from_slice(&ik.iterations.to_le_bytes());
            out.extend_from_slice(&ik.weight.to_le_bytes());
            for child in &ik.children {
                out.extend_from_slice(&child.to_le_bytes());
            }
        }

        out.extend_from_slice(&(self.morphs.len() as u16).to_le_bytes());
        for morph in &self.morphs {
            put_text(&mut out, &morph.name, 20);
            out.extend_from_slice(&(morph.vertices.len() as u32).to_le_bytes());
            out.push(morph.kind);
            for (index, offset) in &morph.vertices {
                out.extend_from_slice(&index.to_le_bytes());
                put_f32s(&mut out, offset);
            }
        }

        out.extend_from_slice(&self.trailer);
        out
    }
}
