//! Benchmarks for registry and class scanning

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use livewire_index::{scan, ComponentIndexer, MemoryFs};

const CLASS_SOURCE: &str = r#"<?php

namespace App\Http\Livewire;

use Livewire\Component;

class Counter extends Component
{
    public $count = 0;
    public $step = 1;

    public function mount(int $count = 0, int $step = 1)
    {
        $this->count = $count;
        $this->step = $step;
    }

    public function increment()
    {
        $this->count += $this->step;
    }

    public function decrement()
    {
        $this->count -= $this->step;
    }

    public function render()
    {
        return view('livewire.counter');
    }
}
"#;

fn registry(components: usize) -> String {
    let mut text = String::from("<?php return array (\n");
    for i in 0..components {
        text.push_str(&format!(
            "  'component-{i}' => 'app\\\\Http\\\\Livewire\\\\Component{i}',\n"
        ));
    }
    text.push_str(");\n");
    text
}

fn bench_scan_class(c: &mut Criterion) {
    c.bench_function("scan_class_members", |b| {
        b.iter(|| {
            let actions = scan::scan_public_methods(black_box(CLASS_SOURCE)).count();
            let properties = scan::scan_public_properties(black_box(CLASS_SOURCE)).count();
            let params = scan::find_mount_signature(black_box(CLASS_SOURCE))
                .map(scan::extract_parameter_names);
            (actions, properties, params)
        })
    });
}

fn bench_scan_registry(c: &mut Criterion) {
    let text = registry(500);

    c.bench_function("scan_registry_500", |b| {
        b.iter(|| scan::scan_registry(black_box(&text)).count())
    });
}

fn bench_resolve_view_worst_case(c: &mut Criterion) {
    let count = 200;
    let mut fs = MemoryFs::new().with_file("bootstrap/cache/livewire-components.php", registry(count));
    for i in 0..count {
        let source = CLASS_SOURCE.replace("livewire.counter", &format!("livewire.component-{i}"));
        fs.insert(format!("app/Http/Livewire/Component{i}.php"), source);
    }
    let indexer = ComponentIndexer::new(fs);
    let last = format!("/srv/app/resources/views/livewire/component-{}.blade.php", count - 1);

    c.bench_function("resolve_view_last_of_200", |b| {
        b.iter(|| indexer.resolve_component_from_view(black_box(&last)).unwrap())
    });
}

criterion_group!(
    benches,
    bench_scan_class,
    bench_scan_registry,
    bench_resolve_view_worst_case
);
criterion_main!(benches);
